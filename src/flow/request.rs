use serde::{Deserialize, Serialize};
use serde_json::json;

use super::snapshot::FlowSnapshot;

/// The API specification submitted to the flow-creation endpoint.
///
/// Field names follow the wire contract of the remote service (camelCase,
/// `apiEndPoint` spelling included).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiFlowRequest {
    pub api_end_point: String,
    pub description: String,
    pub api_type: String,
    pub api_request_parameters: Vec<serde_json::Value>,
    pub api_request_headers: Vec<serde_json::Value>,
    pub api_request_body: Vec<serde_json::Value>,
    pub api_response_headers: Vec<serde_json::Value>,
    pub api_response_body: Vec<serde_json::Value>,
    pub flow: Vec<FlowEntry>,
}

/// One entry of the flow list: either a node descriptor or an edge
/// descriptor, never both.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlowEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<FlowNodeEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge: Option<FlowEdgeEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowNodeEntry {
    pub node_name: String,
    pub node_type: String,
    pub node_parameter: Vec<serde_json::Value>,
    /// Exactly one node per flow is flagged as the entry point.
    pub entry_point: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowEdgeEntry {
    pub edge_type: String,
    pub edge_from: String,
    pub edge_to: EdgeTarget,
}

/// `edgeTo` is a single id or a fan-out list on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EdgeTarget {
    One(String),
    Many(Vec<String>),
}

impl ApiFlowRequest {
    /// Starts a request builder over a snapshot, pre-filled with the
    /// file-summarization defaults of the reference service.
    pub fn builder(snapshot: FlowSnapshot) -> ApiFlowRequestBuilder {
        ApiFlowRequestBuilder::new(snapshot)
    }
}

/// Builds an [`ApiFlowRequest`] from a [`FlowSnapshot`], filling the
/// endpoint metadata around the node/edge descriptors.
pub struct ApiFlowRequestBuilder {
    snapshot: FlowSnapshot,
    api_end_point: String,
    description: String,
    api_type: String,
    request_body: Vec<serde_json::Value>,
    response_body: Vec<serde_json::Value>,
}

impl ApiFlowRequestBuilder {
    pub fn new(snapshot: FlowSnapshot) -> Self {
        Self {
            snapshot,
            api_end_point: "summarizeFile".to_string(),
            description:
                "インプットに指定したファイルを要約してテキストとして返却するAPIです。"
                    .to_string(),
            api_type: "POST".to_string(),
            request_body: vec![json!({ "fileName": "{FilePath}" })],
            response_body: vec![json!({ "message": "{Message}" })],
        }
    }

    pub fn with_endpoint(mut self, name: impl Into<String>) -> Self {
        self.api_end_point = name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_api_type(mut self, api_type: impl Into<String>) -> Self {
        self.api_type = api_type.into();
        self
    }

    pub fn with_request_body(mut self, body: Vec<serde_json::Value>) -> Self {
        self.request_body = body;
        self
    }

    pub fn with_response_body(mut self, body: Vec<serde_json::Value>) -> Self {
        self.response_body = body;
        self
    }

    /// Maps every snapshot node and edge into flow entries. The first node
    /// in append order is flagged as the entry point; positions are layout
    /// metadata and do not travel.
    pub fn build(self) -> ApiFlowRequest {
        let mut flow: Vec<FlowEntry> = self
            .snapshot
            .nodes
            .iter()
            .enumerate()
            .map(|(index, node)| FlowEntry {
                node: Some(FlowNodeEntry {
                    node_name: node.label.clone(),
                    node_type: node.function.clone(),
                    node_parameter: vec![json!(node.parameters)],
                    entry_point: index == 0,
                }),
                ..FlowEntry::default()
            })
            .collect();

        flow.extend(self.snapshot.edges.iter().map(|edge| FlowEntry {
            edge: Some(FlowEdgeEntry {
                edge_type: edge.kind.clone().unwrap_or_else(|| "default".to_string()),
                edge_from: edge.source.clone(),
                edge_to: EdgeTarget::One(edge.target.clone()),
            }),
            ..FlowEntry::default()
        }));

        ApiFlowRequest {
            api_end_point: self.api_end_point,
            description: self.description,
            api_type: self.api_type,
            api_request_parameters: Vec::new(),
            api_request_headers: Vec::new(),
            api_request_body: self.request_body,
            api_response_headers: Vec::new(),
            api_response_body: self.response_body,
            flow,
        }
    }
}
