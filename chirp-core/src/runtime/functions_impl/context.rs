use anyhow::Result;
use chirp_support::{no_such_context, no_window_context};

use crate::runtime::call::CallContext;
use crate::runtime::host::{Console, WindowKind};
use crate::runtime::params::Bound;
use crate::runtime::value::{Array, Value};

fn window_id(id: Option<u64>) -> Value {
    Value::from(id.unwrap_or(0))
}

/// Console of the calling window, warning when there is none.
fn calling_console(ctx: &mut CallContext<'_>) -> Option<Console> {
    let console = ctx.window_console();
    if console.is_none() {
        let message = no_window_context(ctx.function());
        ctx.warning(message);
    }
    console
}

pub fn active(ctx: &mut CallContext<'_>, args: Bound) -> Result<Value> {
    let window = if args.is_supplied(0) {
        ctx.host()
            .find_console(args.unsigned(0))
            .and_then(|console| console.active_window)
    } else {
        ctx.host().active_window()
    };
    Ok(window_id(window))
}

pub fn away(ctx: &mut CallContext<'_>, args: Bound) -> Result<Value> {
    let console = if args.is_supplied(0) {
        ctx.host().find_console(args.unsigned(0))
    } else {
        match calling_console(ctx) {
            Some(console) => Some(console),
            None => return Ok(Value::Nothing),
        }
    };
    Ok(match console {
        Some(console) if console.connected => Value::from(ctx.host().is_away(console.context)),
        _ => Value::Nothing,
    })
}

pub fn channel(ctx: &mut CallContext<'_>, args: Bound) -> Result<Value> {
    let window = match args.supplied() {
        0 => ctx
            .window()
            .filter(|window| window.kind == WindowKind::Channel)
            .map(|window| window.id),
        1 => match calling_console(ctx) {
            Some(console) if console.connected => {
                ctx.host().find_channel(console.context, args.text(0))
            }
            _ => None,
        },
        _ => {
            let context = args.unsigned(1);
            match ctx.host().find_console(context) {
                Some(console) if console.connected => {
                    ctx.host().find_channel(console.context, args.text(0))
                }
                Some(_) => None,
                None => {
                    let message = no_such_context(ctx.function(), context);
                    ctx.warning(message);
                    None
                }
            }
        }
    };
    Ok(window_id(window))
}

pub fn console(ctx: &mut CallContext<'_>, args: Bound) -> Result<Value> {
    let console = if args.is_supplied(0) {
        ctx.host().find_console(args.unsigned(0))
    } else {
        calling_console(ctx)
    };
    Ok(window_id(console.map(|console| console.window)))
}

pub fn context(ctx: &mut CallContext<'_>, args: Bound) -> Result<Value> {
    let (server, nick) = (args.text(0), args.text(1));
    let console = if server.is_empty() && nick.is_empty() {
        ctx.window_console()
    } else {
        ctx.host().find_console_by_identity(server, nick)
    };
    Ok(Value::from(console.map(|console| console.context).unwrap_or(0)))
}

pub fn first_connected_console(ctx: &mut CallContext<'_>, _args: Bound) -> Result<Value> {
    let console = ctx.host().first_connected_console();
    Ok(window_id(console.map(|console| console.window)))
}

pub fn count_status_bar_items(ctx: &mut CallContext<'_>, _args: Bound) -> Result<Value> {
    Ok(Value::from(ctx.host().status_bar_item_count()))
}

pub fn features(ctx: &mut CallContext<'_>, args: Bound) -> Result<Value> {
    let wanted = args.text(0);
    if !wanted.is_empty() {
        return Ok(Value::from(ctx.host().has_feature(wanted)));
    }
    let features: Array = ctx.host().features().into_iter().map(Value::from).collect();
    Ok(Value::Array(features))
}

pub fn class_defined(ctx: &mut CallContext<'_>, args: Bound) -> Result<Value> {
    Ok(Value::from(ctx.host().class_defined(args.text(0))))
}
