//! Tests for RPC frames and dispatch.

mod common;

use common::{add_button, click_counter, count, ui_with_panel};
use peerui::component::{ComponentId, BUTTON_RPC};
use peerui::error::RpcError;
use peerui::rpc::{
    dispatch_call, ArgType, ClientMessage, Dispatched, ErrorFrame, FnHandler, RequestFrame,
    ResponseFrame, RpcCall, RpcValue,
};
use serde_json::json;

#[test]
fn test_request_frame_shape() {
    let frame: RequestFrame = serde_json::from_value(json!({
        "syncId": 4,
        "messages": [{
            "type": "rpc",
            "componentId": 3,
            "interfaceName": "ApiTestServerRpc",
            "methodName": "echo",
            "args": [{"type": "string", "value": "hello"}]
        }]
    }))
    .unwrap();

    let ClientMessage::Rpc(call) = &frame.messages[0] else {
        panic!("expected an rpc message");
    };
    assert_eq!(call.args, vec![RpcValue::from("hello")]);
}

#[test]
fn test_missing_args_default_to_empty() {
    let frame = RequestFrame::decode(
        r#"{"syncId": 1, "messages": [{"type": "rpc", "componentId": 1, "interfaceName": "I", "methodName": "m"}]}"#,
    )
    .unwrap();
    let ClientMessage::Rpc(call) = &frame.messages[0] else {
        panic!("expected an rpc message");
    };
    assert!(call.args.is_empty());
}

#[test]
fn test_response_frame_shape() {
    let mut response = ResponseFrame::new(9);
    response.rpc.push(RpcCall::new(
        ComponentId::new(2),
        "ApiTestClientRpc",
        "run",
        vec![RpcValue::from("t1")],
    ));
    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(
        value["rpc"][0],
        json!({
            "componentId": 2,
            "interfaceName": "ApiTestClientRpc",
            "methodName": "run",
            "args": [{"type": "string", "value": "t1"}]
        })
    );
}

#[test]
fn test_unknown_targets_are_no_such_handler() {
    let (mut tree, _ui, panel) = ui_with_panel();
    let button = add_button(&mut tree, panel, "A");

    for call in [
        RpcCall::new(ComponentId::new(404), BUTTON_RPC, "click", vec![RpcValue::Null]),
        RpcCall::new(button, "NoSuchRpc", "click", vec![]),
        RpcCall::new(button, BUTTON_RPC, "explode", vec![]),
    ] {
        let err = dispatch_call(&mut tree, &call).unwrap_err();
        assert!(
            matches!(err, RpcError::NoSuchHandler { .. }),
            "{call:?} gave {err:?}"
        );
        let frame = ErrorFrame::from(&err);
        assert_eq!(frame.code, "RPC_NO_SUCH_HANDLER");
        assert_eq!(frame.component_id, Some(call.component_id));
    }
}

#[test]
fn test_argument_mismatch() {
    let (mut tree, _ui, panel) = ui_with_panel();
    let button = add_button(&mut tree, panel, "A");
    let clicks = click_counter(&mut tree, button);

    let call = RpcCall::new(button, BUTTON_RPC, "click", vec![RpcValue::Int(1)]);
    let err = dispatch_call(&mut tree, &call).unwrap_err();
    assert!(matches!(err, RpcError::ArgumentMismatch { .. }));
    assert_eq!(count(&clicks), 0);
}

#[test]
fn test_hidden_target_is_ignored() {
    let (mut tree, _ui, panel) = ui_with_panel();
    let button = add_button(&mut tree, panel, "A");
    let clicks = click_counter(&mut tree, button);
    tree.set_visible(panel, false).unwrap();

    let call = RpcCall::new(button, BUTTON_RPC, "click", vec![RpcValue::Null]);
    assert_eq!(dispatch_call(&mut tree, &call).unwrap(), Dispatched::Ignored);
    assert_eq!(count(&clicks), 0);
}

#[test]
fn test_disabled_click_is_silently_dropped() {
    let (mut tree, _ui, panel) = ui_with_panel();
    let button = add_button(&mut tree, panel, "A");
    let clicks = click_counter(&mut tree, button);
    tree.set_enabled(button, false).unwrap();

    let call = RpcCall::new(button, BUTTON_RPC, "click", vec![RpcValue::Null]);
    assert_eq!(dispatch_call(&mut tree, &call).unwrap(), Dispatched::Invoked);
    assert_eq!(count(&clicks), 0);
}

#[test]
fn test_custom_handler_queues_client_calls() {
    let (mut tree, _ui, panel) = ui_with_panel();
    let widget = tree.create_widget();
    tree.add_child(panel, widget).unwrap();
    tree.register_rpc(
        widget,
        FnHandler::new("ApiTestServerRpc").with_method("echo", vec![ArgType::String], |tree, id, args| {
            let text = args[0].as_str().unwrap_or_default().to_string();
            tree.call_client(id, "ApiTestClientRpc", "run", vec![RpcValue::from(text)])
                .map_err(|e| RpcError::HandlerFailed {
                    component: id,
                    interface: "ApiTestServerRpc".to_string(),
                    method: "echo".to_string(),
                    message: e.to_string(),
                })
        }),
    )
    .unwrap();

    for text in ["one", "two"] {
        let call = RpcCall::new(widget, "ApiTestServerRpc", "echo", vec![RpcValue::from(text)]);
        dispatch_call(&mut tree, &call).unwrap();
    }

    let calls = tree.take_client_calls();
    let args: Vec<_> = calls.iter().map(|c| c.args[0].as_str().unwrap()).collect();
    assert_eq!(args, vec!["one", "two"]);
}
