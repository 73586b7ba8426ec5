use anyhow::{Context, Result};
use mintter_blocks_engine::{
    Block, BlockNode, FlowBlock, Group, api_to_tree, block_nodes_to_group, block_to_api,
    group_to_block_nodes, validate,
};
use serde::Serialize;
use serde_json::Value;

/// Converts editor tree JSON into wire JSON.
///
/// A single block becomes one wire block; a `group` becomes a list of block
/// nodes.
pub fn tree_to_wire(input: &str, pretty: bool) -> Result<String> {
    let value: Value = serde_json::from_str(input).context("Input is not valid JSON")?;

    if value.get("type").and_then(Value::as_str) == Some("group") {
        let group: Group = serde_json::from_value(value).context("Invalid block group")?;
        let nodes = group_to_block_nodes(&group);
        log::info!("Converted group of {} top-level blocks", nodes.len());
        to_json(&nodes, pretty)
    } else {
        let tree: FlowBlock = serde_json::from_value(value).context("Invalid block tree")?;
        let block = block_to_api(&tree);
        log::info!(
            "Converted block {} with {} annotations",
            block.id,
            block.annotations.len()
        );
        to_json(&block, pretty)
    }
}

/// Converts wire JSON (a block or a list of block nodes) into editor tree
/// JSON.
pub fn wire_to_tree(input: &str, pretty: bool, check: bool) -> Result<String> {
    let value: Value = serde_json::from_str(input).context("Input is not valid JSON")?;

    if value.is_array() {
        let nodes: Vec<BlockNode> =
            serde_json::from_value(value).context("Invalid block node list")?;
        if check {
            nodes.iter().try_for_each(validate_node)?;
        }
        let group = block_nodes_to_group(&nodes);
        log::info!("Converted {} top-level blocks", group.children.len());
        to_json(&group, pretty)
    } else {
        let block: Block = serde_json::from_value(value).context("Invalid wire block")?;
        if check {
            validate_block(&block)?;
        }
        let tree = api_to_tree(&block);
        log::info!("Converted block {}", tree.id);
        to_json(&tree, pretty)
    }
}

fn validate_block(block: &Block) -> Result<()> {
    validate(block).with_context(|| format!("Block {} is malformed", block.id))
}

fn validate_node(node: &BlockNode) -> Result<()> {
    validate_block(&node.block)?;
    node.children.iter().try_for_each(validate_node)
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TREE: &str = r#"{"type": "statement", "id": "b1", "children": [
        {"type": "paragraph", "children": [
            {"type": "text", "text": "hi "},
            {"type": "text", "text": "there", "emphasis": true}
        ]}
    ]}"#;

    #[test]
    fn test_tree_to_wire_single_block() {
        let json = tree_to_wire(TREE, false).unwrap();

        assert_eq!(
            json,
            r#"{"id":"b1","type":"statement","text":"hi there","annotations":[{"type":"emphasis","attributes":null,"starts":[3],"ends":[8]}]}"#
        );
    }

    #[test]
    fn test_tree_to_wire_group() {
        let input = format!(r#"{{"type": "group", "children": [{TREE}]}}"#);
        let json = tree_to_wire(&input, false).unwrap();

        let nodes: Vec<BlockNode> = serde_json::from_str(&json).unwrap();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].block.text, "hi there");
    }

    #[test]
    fn test_round_trip_through_both_directions() {
        let wire = tree_to_wire(TREE, true).unwrap();
        let tree = wire_to_tree(&wire, false, true).unwrap();

        let expected: Value = serde_json::from_str(TREE).unwrap();
        let actual: Value = serde_json::from_str(&tree).unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_wire_to_tree_block_node_list() {
        let input = r#"[{"block": {"id": "a", "type": "heading", "text": "Top"},
            "children": [{"block": {"id": "b", "type": "statement", "text": "Inner"}}]}]"#;

        let json = wire_to_tree(input, false, true).unwrap();
        let group: Group = serde_json::from_str(&json).unwrap();

        assert_eq!(group.children.len(), 1);
        assert_eq!(group.children[0].id, "a");
        let nested = group.children[0].group.as_ref().unwrap();
        assert_eq!(nested.children[0].id, "b");
    }

    #[test]
    fn test_malformed_block_is_rejected_when_checking() {
        let input = r#"{"id": "b1", "type": "statement", "text": "abc",
            "annotations": [{"type": "strong", "attributes": null, "starts": [1], "ends": [9]}]}"#;

        let err = wire_to_tree(input, false, true).unwrap_err();
        assert!(err.to_string().contains("Block b1 is malformed"));

        // Unchecked conversion still yields a tree.
        assert!(wire_to_tree(input, false, false).is_ok());
    }

    #[test]
    fn test_unknown_block_type_survives_both_directions() {
        let input = r#"{"id": "c1", "type": "callout", "text": "Note"}"#;

        let tree = wire_to_tree(input, false, true).unwrap();
        assert_eq!(
            tree,
            r#"{"type":"callout","id":"c1","children":[{"type":"paragraph","children":[{"type":"text","text":"Note"}]}]}"#
        );

        let wire = tree_to_wire(&tree, false).unwrap();
        assert_eq!(wire, r#"{"id":"c1","type":"callout","text":"Note"}"#);
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let err = tree_to_wire("{not json", false).unwrap_err();
        assert!(err.to_string().contains("Input is not valid JSON"));
    }
}
