use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use designer_ast::{
    GeneratorOptions, Node, builtin_catalog, count_nodes, find_all_nodes, generate, get_depth,
    parse_json, parse_markup,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeStats {
    pub nodes: usize,
    pub depth: usize,
    pub elements: usize,
}

/// Read a JSON component config (one object or a list) into a tree.
pub fn load_config(input: &Path) -> Result<Node> {
    let src =
        fs::read_to_string(input).with_context(|| format!("failed to read {}", input.display()))?;
    let root = parse_json(&src).with_context(|| format!("failed to parse {}", input.display()))?;
    tracing::debug!(path = %input.display(), top_level = root.children.len(), "loaded config");
    Ok(Node::Root(root))
}

/// Generate markup for a config file. Writes to `out` when given and
/// returns the markup either way.
pub fn build_cmd(input: &Path, out: Option<&Path>, options: &GeneratorOptions) -> Result<String> {
    let tree = load_config(input)?;
    let markup = generate(&tree, options);

    if let Some(out) = out {
        if let Some(dir) = out.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }
        fs::write(out, format!("{markup}\n"))
            .with_context(|| format!("failed to write {}", out.display()))?;
        tracing::info!(path = %out.display(), "wrote markup");
    }
    Ok(markup)
}

pub fn stats_cmd(input: &Path) -> Result<TreeStats> {
    let tree = load_config(input)?;
    Ok(TreeStats {
        nodes: count_nodes(&tree),
        depth: get_depth(&tree),
        elements: find_all_nodes(&tree, designer_ast::is_element_node).len(),
    })
}

/// Markup for every element with the given tag, in document order.
pub fn find_cmd(input: &Path, tag: &str, options: &GeneratorOptions) -> Result<Vec<String>> {
    let tree = load_config(input)?;
    let hits = find_all_nodes(&tree, |n| n.as_element().is_some_and(|el| el.tag == tag));
    tracing::debug!(tag, hits = hits.len(), "find");
    Ok(hits.into_iter().map(|n| generate(n, options)).collect())
}

/// Re-generate a markup file with the given options.
pub fn fmt_cmd(input: &Path, options: &GeneratorOptions) -> Result<String> {
    let src =
        fs::read_to_string(input).with_context(|| format!("failed to read {}", input.display()))?;
    let root = parse_markup(&src).with_context(|| format!("failed to parse {}", input.display()))?;
    Ok(generate(&Node::Root(root), options))
}

/// One line per palette entry: `category<TAB>name<TAB>label`.
pub fn catalog_lines() -> Vec<String> {
    let catalog = builtin_catalog();
    catalog
        .categories
        .iter()
        .flat_map(|cat| {
            cat.components
                .iter()
                .map(move |def| format!("{}\t{}\t{}", cat.label, def.name, def.label))
        })
        .collect()
}

/// The catalog as pretty JSON, for feeding back into the UI.
pub fn catalog_json() -> Result<String> {
    serde_json::to_string_pretty(&builtin_catalog()).context("failed to serialize catalog")
}
