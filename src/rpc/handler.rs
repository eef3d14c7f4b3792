//! Typed server-side RPC handlers.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::component::{ComponentId, ComponentTree};
use crate::error::RpcError;

/// A positional RPC argument, tagged with its type on the wire.
///
/// ```json
/// {"type": "int", "value": 3}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum RpcValue {
    String(String),
    Bool(bool),
    Int(i64),
    Float(f64),
    /// Arbitrary structured value, e.g. mouse event details.
    Object(Value),
    Null,
}

impl RpcValue {
    pub fn arg_type(&self) -> ArgType {
        match self {
            RpcValue::String(_) => ArgType::String,
            RpcValue::Bool(_) => ArgType::Bool,
            RpcValue::Int(_) => ArgType::Int,
            RpcValue::Float(_) => ArgType::Float,
            RpcValue::Object(_) => ArgType::Object,
            RpcValue::Null => ArgType::Null,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            RpcValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            RpcValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            RpcValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RpcValue::Float(f) => Some(*f),
            RpcValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Value> {
        match self {
            RpcValue::Object(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, RpcValue::Null)
    }
}

impl From<&str> for RpcValue {
    fn from(s: &str) -> Self {
        RpcValue::String(s.to_string())
    }
}

impl From<String> for RpcValue {
    fn from(s: String) -> Self {
        RpcValue::String(s)
    }
}

impl From<bool> for RpcValue {
    fn from(b: bool) -> Self {
        RpcValue::Bool(b)
    }
}

impl From<i64> for RpcValue {
    fn from(i: i64) -> Self {
        RpcValue::Int(i)
    }
}

impl From<f64> for RpcValue {
    fn from(f: f64) -> Self {
        RpcValue::Float(f)
    }
}

/// Declared type of a method parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgType {
    String,
    Bool,
    Int,
    /// Also accepts integers.
    Float,
    /// Also accepts `null`.
    Object,
    Null,
}

impl ArgType {
    pub fn accepts(&self, value: &RpcValue) -> bool {
        match (self, value) {
            (ArgType::Float, RpcValue::Int(_)) => true,
            (ArgType::Object, RpcValue::Null) => true,
            (expected, value) => *expected == value.arg_type(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ArgType::String => "string",
            ArgType::Bool => "bool",
            ArgType::Int => "int",
            ArgType::Float => "float",
            ArgType::Object => "object",
            ArgType::Null => "null",
        }
    }
}

impl fmt::Display for ArgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name and positional parameter types of one RPC method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSignature {
    pub name: String,
    pub params: Vec<ArgType>,
}

impl MethodSignature {
    pub fn new(name: impl Into<String>, params: Vec<ArgType>) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }

    /// Check `args` against the declared parameters.
    ///
    /// The error message names the first offending position.
    pub fn check(&self, interface: &str, args: &[RpcValue]) -> Result<(), RpcError> {
        let mismatch = |message: String| RpcError::ArgumentMismatch {
            interface: interface.to_string(),
            method: self.name.clone(),
            message,
        };

        if args.len() != self.params.len() {
            return Err(mismatch(format!(
                "expected {} argument(s), got {}",
                self.params.len(),
                args.len()
            )));
        }
        for (index, (param, arg)) in self.params.iter().zip(args).enumerate() {
            if !param.accepts(arg) {
                return Err(mismatch(format!(
                    "argument {} should be {}, got {}",
                    index,
                    param,
                    arg.arg_type()
                )));
            }
        }
        Ok(())
    }
}

/// A server-side RPC interface implementation attached to a component.
///
/// Dispatch has already validated the arguments against
/// [`methods`](RpcHandler::methods) when [`invoke`](RpcHandler::invoke) runs.
pub trait RpcHandler: Send + Sync {
    /// Interface name, e.g. `"ButtonServerRpc"`.
    fn interface(&self) -> &str;

    fn methods(&self) -> &[MethodSignature];

    fn method(&self, name: &str) -> Option<&MethodSignature> {
        self.methods().iter().find(|m| m.name == name)
    }

    fn invoke(
        &self,
        tree: &mut ComponentTree,
        component: ComponentId,
        method: &str,
        args: &[RpcValue],
    ) -> Result<(), RpcError>;
}

/// Method body of a [`FnHandler`].
pub type MethodFn =
    Arc<dyn Fn(&mut ComponentTree, ComponentId, &[RpcValue]) -> Result<(), RpcError> + Send + Sync>;

/// Handler assembled from closures, one per method.
///
/// ```ignore
/// let echo = FnHandler::new("ApiTestServerRpc").with_method(
///     "echo",
///     vec![ArgType::String],
///     |tree, id, args| { /* ... */ Ok(()) },
/// );
/// tree.register_rpc(widget, echo)?;
/// ```
pub struct FnHandler {
    interface: String,
    signatures: Vec<MethodSignature>,
    bodies: HashMap<String, MethodFn>,
}

impl FnHandler {
    pub fn new(interface: impl Into<String>) -> Self {
        Self {
            interface: interface.into(),
            signatures: Vec::new(),
            bodies: HashMap::new(),
        }
    }

    /// Add (or replace) a method.
    pub fn with_method<F>(mut self, name: impl Into<String>, params: Vec<ArgType>, body: F) -> Self
    where
        F: Fn(&mut ComponentTree, ComponentId, &[RpcValue]) -> Result<(), RpcError>
            + Send
            + Sync
            + 'static,
    {
        let name = name.into();
        self.signatures.retain(|s| s.name != name);
        self.signatures.push(MethodSignature::new(name.clone(), params));
        self.bodies.insert(name, Arc::new(body));
        self
    }
}

impl fmt::Debug for FnHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnHandler")
            .field("interface", &self.interface)
            .field("signatures", &self.signatures)
            .finish()
    }
}

impl RpcHandler for FnHandler {
    fn interface(&self) -> &str {
        &self.interface
    }

    fn methods(&self) -> &[MethodSignature] {
        &self.signatures
    }

    fn invoke(
        &self,
        tree: &mut ComponentTree,
        component: ComponentId,
        method: &str,
        args: &[RpcValue],
    ) -> Result<(), RpcError> {
        let body = self
            .bodies
            .get(method)
            .ok_or_else(|| RpcError::NoSuchHandler {
                component,
                interface: self.interface.clone(),
                method: method.to_string(),
            })?;
        body(tree, component, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_wire_format() {
        let value = RpcValue::Int(3);
        assert_eq!(serde_json::to_value(&value).unwrap(), json!({"type": "int", "value": 3}));

        let parsed: RpcValue =
            serde_json::from_value(json!({"type": "string", "value": "hi"})).unwrap();
        assert_eq!(parsed, RpcValue::from("hi"));

        let null: RpcValue = serde_json::from_value(json!({"type": "null"})).unwrap();
        assert!(null.is_null());
    }

    #[test]
    fn test_widening_rules() {
        assert!(ArgType::Float.accepts(&RpcValue::Int(1)));
        assert!(!ArgType::Int.accepts(&RpcValue::Float(1.0)));
        assert!(ArgType::Object.accepts(&RpcValue::Null));
        assert!(!ArgType::String.accepts(&RpcValue::Null));
    }

    #[test]
    fn test_signature_check_reports_position() {
        let sig = MethodSignature::new("echo", vec![ArgType::String]);
        assert!(sig.check("Api", &[RpcValue::from("x")]).is_ok());

        let err = sig.check("Api", &[RpcValue::Bool(true)]).unwrap_err();
        match err {
            RpcError::ArgumentMismatch { method, message, .. } => {
                assert_eq!(method, "echo");
                assert!(message.contains("argument 0 should be string, got bool"));
            }
            other => panic!("unexpected error: {other:?}"),
        }

        assert!(sig.check("Api", &[]).is_err());
    }

    #[test]
    fn test_fn_handler_replaces_method() {
        let handler = FnHandler::new("Api")
            .with_method("ping", vec![], |_, _, _| Ok(()))
            .with_method("ping", vec![ArgType::Int], |_, _, _| Ok(()));
        assert_eq!(handler.methods().len(), 1);
        assert_eq!(handler.method("ping").unwrap().params, vec![ArgType::Int]);
        assert!(handler.method("pong").is_none());
    }
}
