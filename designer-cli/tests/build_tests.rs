use std::fs;
use std::path::PathBuf;

use designer_ast::GeneratorOptions;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

const LOGIN_FORM: &str = r#"<el-form label-width="80px" inline>
  <el-form-item label="用户名">
    <el-input placeholder="请输入用户名" clearable />
  </el-form-item>
  <el-form-item label="密码">
    <el-input type="password" show-password />
  </el-form-item>
  <el-button type="primary">登录</el-button>
</el-form>"#;

#[test]
fn cli_build_writes_markup_file() {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let out_file = PathBuf::from(manifest_dir)
        .join("../target/designer-cli-tests")
        .join(format!("{}-build", std::process::id()))
        .join("login.html");

    let markup = designer_cli::build_cmd(
        &fixture("login_form.json"),
        Some(out_file.as_path()),
        &GeneratorOptions::default(),
    )
    .expect("build");
    assert_eq!(markup, LOGIN_FORM);

    let content = fs::read_to_string(&out_file).expect("read build output");
    assert_eq!(content, format!("{LOGIN_FORM}\n"));
}

#[test]
fn cli_build_compact() {
    let markup = designer_cli::build_cmd(
        &fixture("login_form.json"),
        None,
        &GeneratorOptions::compact(),
    )
    .expect("build");
    assert!(!markup.contains('\n'));
    assert!(markup.starts_with(r#"<el-form label-width="80px" inline><el-form-item"#));
}

#[test]
fn cli_stats() {
    let stats = designer_cli::stats_cmd(&fixture("login_form.json")).expect("stats");
    // root, form, 2 items, 2 inputs, button, button text
    assert_eq!(stats.nodes, 8);
    assert_eq!(stats.elements, 6);
    assert_eq!(stats.depth, 4);
}

#[test]
fn cli_find_inputs() {
    let hits = designer_cli::find_cmd(
        &fixture("login_form.json"),
        "el-input",
        &GeneratorOptions::default(),
    )
    .expect("find");
    assert_eq!(
        hits,
        [
            r#"<el-input placeholder="请输入用户名" clearable />"#,
            r#"<el-input type="password" show-password />"#,
        ]
    );
}

#[test]
fn cli_fmt_reindents_markup() {
    let out = designer_cli::fmt_cmd(&fixture("page.html"), &GeneratorOptions::default())
        .expect("fmt");
    let expected = r#"<el-card shadow="hover">
  <el-row>
    <el-col span="12">左</el-col>
    <el-col span="12">右</el-col>
  </el-row>
</el-card>"#;
    assert_eq!(out, expected);
}

#[test]
fn cli_missing_input_names_the_path() {
    let err = designer_cli::stats_cmd(&fixture("nope.json")).unwrap_err();
    assert!(format!("{err}").contains("nope.json"));
}

#[test]
fn cli_catalog_listing() {
    let lines = designer_cli::catalog_lines();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("el-button"));
    let json = designer_cli::catalog_json().expect("json");
    assert!(json.contains("\"el-card\""));
}
