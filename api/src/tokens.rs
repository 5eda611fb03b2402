use gloo_net::http::Request;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

// the token document is a loosely-shaped json tree, so we only look at its shape once
// (here, at the boundary) and hand everything else a tagged tree
//
// any object that carries both a `cssVar` and a `value` is a leaf, every other object
// is a group whose children keep their document order. arrays are groups keyed by index
#[derive(Clone, Debug, Default, PartialEq)]
pub enum TokenNode {
    Group(Vec<(String, TokenNode)>),
    Leaf(TokenLeaf),
    #[default]
    Ignored,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TokenLeaf {
    pub css_var: String,
    // None when the document has null (or no usable scalar) for the value
    pub value: Option<String>,
}

const CSS_VAR_KEY: &str = "cssVar";
const VALUE_KEY: &str = "value";

impl TokenNode {
    pub fn group(&self, key: &str) -> Option<&TokenNode> {
        match self {
            TokenNode::Group(children) => children
                .iter()
                .find(|(name, _)| name == key)
                .map(|(_, node)| node),
            _ => None,
        }
    }

    pub fn children(&self) -> &[(String, TokenNode)] {
        match self {
            TokenNode::Group(children) => children,
            _ => &[],
        }
    }

    // depth-first, document order
    pub fn leaves(&self) -> Vec<&TokenLeaf> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a TokenLeaf>) {
        match self {
            TokenNode::Group(children) => {
                for (_, child) in children {
                    child.collect_leaves(out);
                }
            }
            TokenNode::Leaf(leaf) => out.push(leaf),
            TokenNode::Ignored => {}
        }
    }
}

impl From<Value> for TokenNode {
    fn from(value: Value) -> Self {
        let map = match value {
            Value::Object(map) => map,
            Value::Array(items) => {
                return TokenNode::Group(
                    items
                        .into_iter()
                        .enumerate()
                        .map(|(idx, child)| (idx.to_string(), TokenNode::from(child)))
                        .collect(),
                );
            }
            _ => return TokenNode::Ignored,
        };

        if map.contains_key(CSS_VAR_KEY) && map.contains_key(VALUE_KEY) {
            let css_var = match map.get(CSS_VAR_KEY) {
                Some(Value::String(name)) => name.clone(),
                _ => return TokenNode::Ignored,
            };

            return TokenNode::Leaf(TokenLeaf {
                css_var,
                value: map.get(VALUE_KEY).and_then(scalar_string),
            });
        }

        TokenNode::Group(
            map.into_iter()
                .map(|(key, child)| (key, TokenNode::from(child)))
                .collect(),
        )
    }
}

fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

impl<'de> Deserialize<'de> for TokenNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(TokenNode::from(Value::deserialize(deserializer)?))
    }
}

pub async fn get_tokens(url: &str) -> anyhow::Result<TokenNode> {
    let resp = Request::get(url).send().await?;

    if resp.ok() {
        Ok(resp.json().await?)
    } else {
        Err(anyhow::Error::msg(format!(
            "token request failed with status {}",
            resp.status()
        )))
    }
}
