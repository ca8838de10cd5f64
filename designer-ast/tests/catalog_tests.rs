use designer_ast::ast::root;
use designer_ast::{
    AttrValue, Category, Node, builtin_catalog, count_nodes, find_element_by_id, insert_child,
};

#[test]
fn builtin_categories() {
    let catalog = builtin_catalog();
    let names: Vec<Category> = catalog.categories.iter().map(|c| c.name).collect();
    assert_eq!(names, [Category::Basic, Category::High, Category::Business]);
    assert_eq!(catalog.category(Category::Basic).unwrap().components.len(), 2);
    assert!(catalog.category(Category::Business).unwrap().components.is_empty());
}

#[test]
fn button_template_generates_without_false_attributes() {
    let catalog = builtin_catalog();
    let button = catalog.find("el-button").unwrap();
    assert_eq!(button.label, "按钮");
    assert_eq!(
        Node::Element(button.template.clone()).to_string(),
        r#"<el-button type="primary" size="default">按钮</el-button>"#
    );
}

#[test]
fn instantiate_stamps_id_and_leaves_template_alone() {
    let catalog = builtin_catalog();
    let card = catalog.find("el-card").unwrap();
    let a = card.instantiate("card-1");
    let b = card.instantiate("card-2");
    assert_eq!(a.id.as_deref(), Some("card-1"));
    assert_eq!(b.id.as_deref(), Some("card-2"));
    assert!(card.template.id.is_none());
    assert_eq!(a.attribute("shadow"), Some(&AttrValue::Str("hover".into())));
    assert_eq!(a.meta.as_ref().unwrap().is_container, Some(true));
}

#[test]
fn drop_instances_into_a_page() {
    let catalog = builtin_catalog();
    let card = catalog.find("el-card").unwrap().instantiate("card-1");
    let mut page = root(vec![Node::Element(card)]);

    let input = catalog.find("el-input").unwrap().instantiate("input-1");
    insert_child(&mut page, "card-1", 0, Node::Element(input)).unwrap();

    let found = find_element_by_id(&page, "input-1").unwrap();
    assert_eq!(found.tag, "el-input");
    // root, card, input, input text, card text
    assert_eq!(count_nodes(&page), 5);
}

#[test]
fn unknown_component() {
    assert!(builtin_catalog().find("el-table").is_none());
}
