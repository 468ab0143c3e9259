use anyhow::Result;
use chirp_intrinsics::{codec, text};
use chirp_support::decode_error;

use crate::runtime::call::CallContext;
use crate::runtime::params::Bound;
use crate::runtime::value::Value;

pub fn ascii_to_base64(_ctx: &mut CallContext<'_>, args: Bound) -> Result<Value> {
    Ok(Value::from(codec::to_base64(args.text(0))))
}

pub fn ascii_to_hex(_ctx: &mut CallContext<'_>, args: Bound) -> Result<Value> {
    Ok(Value::from(codec::to_hex(args.text(0))))
}

pub fn base64_to_ascii(ctx: &mut CallContext<'_>, args: Bound) -> Result<Value> {
    let encoded = args.text(0);
    match codec::from_base64(encoded) {
        Ok(decoded) => Ok(Value::from(decoded)),
        Err(error) => {
            let message = decode_error(ctx.function(), encoded, error);
            ctx.warning(message);
            Ok(Value::from(String::new()))
        }
    }
}

pub fn bold(_ctx: &mut CallContext<'_>, _args: Bound) -> Result<Value> {
    Ok(Value::from(text::BOLD))
}

pub fn cr(_ctx: &mut CallContext<'_>, _args: Bound) -> Result<Value> {
    Ok(Value::from('\r'))
}

pub fn char_from_code(_ctx: &mut CallContext<'_>, args: Bound) -> Result<Value> {
    let decoded = text::char_from_code(args.unsigned(0))
        .map(String::from)
        .unwrap_or_default();
    Ok(Value::from(decoded))
}

pub fn escape(_ctx: &mut CallContext<'_>, args: Bound) -> Result<Value> {
    Ok(Value::from(text::escape(args.text(0))))
}

pub fn fmtlink(_ctx: &mut CallContext<'_>, args: Bound) -> Result<Value> {
    Ok(Value::from(text::link(
        args.text(0),
        args.text(1),
        args.text(2),
    )))
}
