use color_eyre::Result;
use crossterm::event::KeyCode;
use tokio::io::BufReader;
use tracing::{info, warn};

use peerui::adapters::JsonLinesSink;
use peerui::component::{ComponentResult, ComponentTree};
use peerui::error::RpcError;
use peerui::input::KeyCombo;
use peerui::models::ErrorMessage;
use peerui::rpc::{ArgType, FnHandler, RpcValue};
use peerui::session::{Session, SessionConfig};
use peerui::telemetry;
use peerui::traits::FrameSink;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Builds the demo UI: a window holding a save button and an echo widget.
///
/// The echo widget answers `ApiTestServerRpc.echo(text)` by calling
/// `ApiTestClientRpc.run(text)` on the client.
fn build_demo(tree: &mut ComponentTree) -> ComponentResult<()> {
    let ui = tree.create_ui();
    tree.set_debug_id(ui, Some("root"))?;

    let window = tree.create_window();
    tree.set_caption(window, Some("Demo"))?;
    tree.add_window(ui, window)?;

    let layout = tree.create_container();
    tree.set_size_full(layout)?;
    tree.add_child(window, layout)?;

    let save = tree.create_button("Save");
    tree.set_disable_on_click(save, true)?;
    tree.set_click_shortcut(save, KeyCombo::ctrl(KeyCode::Char('s')))?;
    tree.add_click_listener(save, |tree, event| {
        info!(component = %event.source, "Save clicked");
        let saved = tree
            .set_caption(event.source, Some("Saved"))
            .and_then(|_| tree.set_enabled(event.source, true));
        if let Err(err) = saved {
            warn!(component = %event.source, code = err.error_code(), "Could not update Save: {}", err);
        }
    })?;
    tree.add_child(layout, save)?;

    let echo = tree.create_widget();
    tree.set_component_error(
        echo,
        Some(ErrorMessage::new("Nothing echoed yet").with_level(peerui::models::ErrorLevel::Info)),
    )?;
    tree.register_rpc(
        echo,
        FnHandler::new("ApiTestServerRpc").with_method("echo", vec![ArgType::String], |tree, id, args| {
            let text = args.first().and_then(RpcValue::as_str).unwrap_or_default().to_string();
            let failed = |e: peerui::error::ComponentError| RpcError::HandlerFailed {
                component: id,
                interface: "ApiTestServerRpc".to_string(),
                method: "echo".to_string(),
                message: e.to_string(),
            };
            tree.set_component_error(id, None).map_err(failed)?;
            tree.call_client(id, "ApiTestClientRpc", "run", vec![RpcValue::from(text)])
                .map_err(failed)
        }),
    )?;
    tree.add_child(layout, echo)?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    telemetry::init_tracing();

    let config = SessionConfig::from_env()?;
    let session = Session::new(config);
    session.access(build_demo).await?;
    info!(session = %session.id(), version = VERSION, "peerui demo ready");

    let sink = JsonLinesSink::stdout();
    sink.send(&session.initial_response().await).await?;
    session
        .serve(BufReader::new(tokio::io::stdin()), &sink)
        .await?;
    Ok(())
}
