use anyhow::Result;
use chirp_intrinsics::date::{self, BrokenDownTime};
use chirp_support::invalid_date;
use time::UtcOffset;
use tracing::debug;

use crate::runtime::call::CallContext;
use crate::runtime::params::Bound;
use crate::runtime::value::Value;

pub fn date(ctx: &mut CallContext<'_>, args: Bound) -> Result<Value> {
    let host = ctx.host();
    let unix = if args.is_supplied(1) {
        args.signed(1)
    } else {
        host.now().unix_timestamp()
    };

    let at = match date::moment(unix, UtcOffset::UTC) {
        Ok(at) => at,
        Err(error) => {
            let message = invalid_date(ctx.function(), error);
            ctx.warning(message);
            return Ok(Value::Nothing);
        }
    };
    let offset = host.utc_offset(at).unwrap_or_else(|| {
        debug!("local offset unavailable, formatting in UTC");
        UtcOffset::UTC
    });
    let local = match date::moment(unix, offset) {
        Ok(local) => local,
        Err(error) => {
            let message = invalid_date(ctx.function(), error);
            ctx.warning(message);
            return Ok(Value::Nothing);
        }
    };

    Ok(Value::from(date::format(
        args.text(0),
        &BrokenDownTime::from(local),
    )))
}
