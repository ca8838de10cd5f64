pub mod ast;
pub mod catalog;
pub mod generator;
pub mod markup;
pub mod parser;
pub mod tree;

pub use ast::{
    AttrValue, AttributeNode, Category, ElementMeta, ElementNode, Node, RootNode, TextNode,
};
pub use catalog::{Catalog, ComponentCategory, ComponentDefinition, builtin_catalog};
pub use generator::{Generator, GeneratorOptions, escape_attr_value, generate};
pub use markup::{MarkupError, parse_markup};
pub use parser::{
    ComponentConfig, ConfigChild, ConfigError, ConfigInput, PropValue, parse, parse_all,
    parse_input, parse_json,
};
pub use tree::{
    TreeError, count_nodes, find_all_nodes, find_element_by_id, find_element_by_id_mut,
    find_node, find_node_mut, get_depth, insert_child, is_element_node, is_text_node,
    remove_node_by_id,
};
