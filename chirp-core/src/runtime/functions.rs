//! Builtin functions shipped with the engine.
//!
//! Scripts call these as `$name(...)`; names are matched without regard to
//! case. Each variant carries its declared parameters, its handler and any
//! alias it is also registered under.

use super::functions_impl::{self, collections, context, date, text, FunctionImpl};
use super::params::{optional, required, Param, ParamKind, Signature};

const CONTEXT_ID: &[Param] = &[optional("context_id", ParamKind::Unsigned)];
const AWAY: &[Param] = &[optional("irc_context_id", ParamKind::Unsigned)];
const CHANNEL: &[Param] = &[
    optional("channel_name", ParamKind::NonEmptyString),
    optional("context_id", ParamKind::Unsigned),
];
const CONTEXT: &[Param] = &[
    optional("server", ParamKind::String),
    optional("nick", ParamKind::String),
];
const FEATURES: &[Param] = &[optional("test_feature", ParamKind::String)];
const CLASS_DEFINED: &[Param] = &[required("className", ParamKind::NonEmptyString)];
const ASCII_STRING: &[Param] = &[required("ascii_string", ParamKind::String)];
const BASE64_STRING: &[Param] = &[required("base64_encoded_string", ParamKind::String)];
const CHAR: &[Param] = &[required("unicode_value", ParamKind::Unsigned)];
const ESCAPE: &[Param] = &[required("text", ParamKind::NonEmptyString)];
const FMTLINK: &[Param] = &[
    required("link_text", ParamKind::NonEmptyString),
    required("double_click_command", ParamKind::String),
    optional("tooltip_text", ParamKind::String),
];
const BOOLEAN: &[Param] = &[required("data", ParamKind::Variant)];
const DATE: &[Param] = &[
    required("format", ParamKind::NonEmptyString),
    optional("unixtime", ParamKind::Signed),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Function {
    // Containers
    Array,
    Flatten,

    // Windows and IRC contexts
    Active,
    Away,
    Channel,
    Console,
    Context,
    FirstConnectedConsole,
    CountStatusBarItems,

    // Application
    Features,
    ClassDefined,

    // Text and encodings
    AsciiToBase64,
    AsciiToHex,
    Base64ToAscii,
    Bold,
    Char,
    Cr,
    Escape,
    FmtLink,

    // Booleans
    Boolean,
    False,

    // Time
    Date,
}

impl Function {
    /// Canonical script name, without the leading `$`
    pub fn name(self) -> &'static str {
        match self {
            Self::Array => "array",
            Self::Flatten => "flatten",
            Self::Active => "active",
            Self::Away => "away",
            Self::Channel => "channel",
            Self::Console => "console",
            Self::Context => "context",
            Self::FirstConnectedConsole => "firstConnectedConsole",
            Self::CountStatusBarItems => "countStatusBarItems",
            Self::Features => "features",
            Self::ClassDefined => "classDefined",
            Self::AsciiToBase64 => "asciiToBase64",
            Self::AsciiToHex => "asciiToHex",
            Self::Base64ToAscii => "base64ToAscii",
            Self::Bold => "b",
            Self::Char => "char",
            Self::Cr => "cr",
            Self::Escape => "escape",
            Self::FmtLink => "fmtlink",
            Self::Boolean => "boolean",
            Self::False => "false",
            Self::Date => "date",
        }
    }

    /// Extra names registered for the same contract and handler
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Boolean => &["bool"],
            _ => &[],
        }
    }

    pub fn signature(self) -> Signature {
        match self {
            Self::Array | Self::Flatten => Signature::variadic(&[]),
            Self::Active | Self::Console => Signature::fixed(CONTEXT_ID),
            Self::Away => Signature::fixed(AWAY),
            Self::Channel => Signature::fixed(CHANNEL),
            Self::Context => Signature::fixed(CONTEXT),
            Self::FirstConnectedConsole
            | Self::CountStatusBarItems
            | Self::Bold
            | Self::Cr
            | Self::False => Signature::none(),
            Self::Features => Signature::fixed(FEATURES),
            Self::ClassDefined => Signature::fixed(CLASS_DEFINED),
            Self::AsciiToBase64 | Self::AsciiToHex => Signature::fixed(ASCII_STRING),
            Self::Base64ToAscii => Signature::fixed(BASE64_STRING),
            Self::Char => Signature::fixed(CHAR),
            Self::Escape => Signature::fixed(ESCAPE),
            Self::FmtLink => Signature::fixed(FMTLINK),
            Self::Boolean => Signature::fixed(BOOLEAN),
            Self::Date => Signature::fixed(DATE),
        }
    }

    pub fn handler(self) -> FunctionImpl {
        match self {
            Self::Array => collections::array,
            Self::Flatten => collections::flatten,
            Self::Active => context::active,
            Self::Away => context::away,
            Self::Channel => context::channel,
            Self::Console => context::console,
            Self::Context => context::context,
            Self::FirstConnectedConsole => context::first_connected_console,
            Self::CountStatusBarItems => context::count_status_bar_items,
            Self::Features => context::features,
            Self::ClassDefined => context::class_defined,
            Self::AsciiToBase64 => text::ascii_to_base64,
            Self::AsciiToHex => text::ascii_to_hex,
            Self::Base64ToAscii => text::base64_to_ascii,
            Self::Bold => text::bold,
            Self::Char => text::char_from_code,
            Self::Cr => text::cr,
            Self::Escape => text::escape,
            Self::FmtLink => text::fmtlink,
            Self::Boolean => functions_impl::boolean,
            Self::False => functions_impl::false_value,
            Self::Date => date::date,
        }
    }

    /// Returns an iterator over all builtins
    pub fn all() -> impl Iterator<Item = Self> {
        use Function::*;
        [
            // Containers
            Array,
            Flatten,
            // Windows and IRC contexts
            Active,
            Away,
            Channel,
            Console,
            Context,
            FirstConnectedConsole,
            CountStatusBarItems,
            // Application
            Features,
            ClassDefined,
            // Text and encodings
            AsciiToBase64,
            AsciiToHex,
            Base64ToAscii,
            Bold,
            Char,
            Cr,
            Escape,
            FmtLink,
            // Booleans
            Boolean,
            False,
            // Time
            Date,
        ]
        .into_iter()
    }
}
