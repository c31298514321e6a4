//! A counter with a focusable button.
//!
//! Tab focuses the button, Enter or a click increments, Ctrl+C quits.
//! Logs go to stderr; run with `RUST_LOG=gilt_toolkit=debug cargo run
//! --example counter 2>counter.log` to capture them.

use std::cell::Cell;
use std::rc::Rc;

use gilt_toolkit::element::dsl::*;
use gilt_toolkit::event::{key_handler, mouse_handler, EventResult, Key, KeyEvent, MouseAction, MouseEvent};
use gilt_toolkit::layout::Constraint;
use gilt_toolkit::{App, AppConfig};
use tracing_subscriber::EnvFilter;

const CSS: &str = r#"
Panel::border { color: blue; }
Panel::title { color: cyan; }
#count { text-style: bold; }
#plus { background: #303030; }
#plus:focus { background: green; color: black; }
.hint { color: gray; }
"#;

fn main() -> gilt_toolkit::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let count = Rc::new(Cell::new(0u32));
    let shown = Rc::clone(&count);
    let on_key = Rc::clone(&count);
    let on_click = Rc::clone(&count);

    let button = text(" + ")
        .with_id("plus")
        .focusable(true)
        .with_constraint(Constraint::Length(1))
        .on_key(key_handler(move |e: &KeyEvent| {
            if e.code == Key::Enter {
                on_key.set(on_key.get() + 1);
                EventResult::Handled
            } else {
                EventResult::Unhandled
            }
        }))
        .on_mouse(mouse_handler(move |e: &MouseEvent| match e.kind {
            MouseAction::Down(_) => {
                on_click.set(on_click.get() + 1);
                EventResult::Handled
            }
            _ => EventResult::Unhandled,
        }));

    let root = panel(
        column([
            boxed(lazy(move || {
                text(format!("Count: {}", shown.get()))
                    .with_id("count")
                    .with_constraint(Constraint::Length(1))
            })),
            boxed(button),
            boxed(text("Tab to focus, Enter to add, Ctrl+C to quit").with_class("hint")),
        ])
        .spacing(1),
    )
    .title("Counter");

    let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
    runtime.block_on(async {
        let mut app = App::new(root, AppConfig::new().with_title("counter").with_css(CSS))?;
        app.run().await
    })
}
