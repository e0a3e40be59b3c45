use ahash::AHashMap;

/// Well-known function tags used by the default registry.
pub const START_TAG: &str = "start";
pub const END_TAG: &str = "end";
pub const INPUT_FILE_TAG: &str = "inputFile";
pub const IF_TAG: &str = "if";
pub const SUMMARIZE_TAG: &str = "summarize";

/// Describes one node type the editor can create: its function tag, the
/// display label shown in the palette, the primary parameter configured
/// through the side panel, and whether the node is a protected sentinel.
#[derive(Debug, Clone)]
pub struct NodeType {
    pub tag: String,
    pub label: String,
    /// The parameter key this node type is configured with (e.g. "path"
    /// for a file input node). `None` when the type takes no configuration.
    pub parameter_hint: Option<String>,
    /// Protected sentinels (start/end) are exempt from deletion and
    /// function-tag edits.
    pub protected: bool,
}

impl NodeType {
    pub fn new(tag: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            label: label.into(),
            parameter_hint: None,
            protected: false,
        }
    }

    pub fn with_parameter(mut self, key: impl Into<String>) -> Self {
        self.parameter_hint = Some(key.into());
        self
    }

    pub fn protected(mut self) -> Self {
        self.protected = true;
        self
    }
}

/// A capability-configured registry of node types, keyed by function tag.
///
/// All editor variants share one registry instead of re-deriving their own
/// add/delete/connect behavior per screen. Custom types can be registered
/// through [`crate::graph::GraphEditorBuilder::with_node_type`].
#[derive(Debug, Clone)]
pub struct NodeTypeRegistry {
    types: AHashMap<String, NodeType>,
}

impl NodeTypeRegistry {
    /// An empty registry with no known node types.
    pub fn empty() -> Self {
        Self {
            types: AHashMap::new(),
        }
    }

    /// The built-in node set: start/end sentinels plus the file input,
    /// condition and summarize operations.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register(NodeType::new(START_TAG, "開始").protected());
        registry.register(NodeType::new(END_TAG, "END").protected());
        registry.register(NodeType::new(INPUT_FILE_TAG, "ファイル入力").with_parameter("path"));
        registry.register(NodeType::new(IF_TAG, "条件").with_parameter("condition"));
        registry.register(NodeType::new(SUMMARIZE_TAG, "要約").with_parameter("model"));
        registry
    }

    pub fn register(&mut self, node_type: NodeType) {
        self.types.insert(node_type.tag.clone(), node_type);
    }

    pub fn get(&self, tag: &str) -> Option<&NodeType> {
        self.types.get(tag)
    }

    /// Display label for a tag, falling back to the tag itself for
    /// unregistered types.
    pub fn label_for(&self, tag: &str) -> String {
        self.types
            .get(tag)
            .map(|t| t.label.clone())
            .unwrap_or_else(|| tag.to_string())
    }

    /// Reverse lookup from a palette label to its function tag.
    pub fn tag_for_label(&self, label: &str) -> Option<&str> {
        self.types
            .values()
            .find(|t| t.label == label)
            .map(|t| t.tag.as_str())
    }

    /// Unregistered tags are never protected.
    pub fn is_protected(&self, tag: &str) -> bool {
        self.types.get(tag).is_some_and(|t| t.protected)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NodeType> {
        self.types.values()
    }
}
