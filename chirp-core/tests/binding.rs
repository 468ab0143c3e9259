use chirp_core::{
    bind, optional, required, Arg, BindingError, Param, ParamKind, Signature, Value,
};

const OPTIONALS: &[Param] = &[
    optional("count", ParamKind::Unsigned),
    optional("offset", ParamKind::Signed),
    optional("label", ParamKind::String),
    optional("name", ParamKind::NonEmptyString),
    optional("flag", ParamKind::Boolean),
    optional("data", ParamKind::Variant),
];

const REQUIRED: &[Param] = &[
    required("format", ParamKind::NonEmptyString),
    optional("unixtime", ParamKind::Signed),
];

#[test]
fn omitted_optionals_bind_zero_values() -> anyhow::Result<()> {
    let bound = bind(&Signature::fixed(OPTIONALS), Vec::new())?;
    assert_eq!(bound.supplied(), 0);
    assert_eq!(bound.arg(0), Some(&Arg::Unsigned(0)));
    assert_eq!(bound.arg(1), Some(&Arg::Signed(0)));
    assert_eq!(bound.arg(2), Some(&Arg::Text(String::new())));
    assert_eq!(bound.arg(3), Some(&Arg::Text(String::new())));
    assert_eq!(bound.arg(4), Some(&Arg::Boolean(false)));
    assert_eq!(bound.arg(5), Some(&Arg::Variant(Value::Nothing)));
    Ok(())
}

#[test]
fn arguments_are_coerced_to_declared_kinds() -> anyhow::Result<()> {
    let args = vec![
        Value::from("7"),
        Value::from("-3"),
        Value::from("hello"),
        Value::from("chan"),
        Value::from("2"),
        Value::from("raw"),
    ];
    let bound = bind(&Signature::fixed(OPTIONALS), args)?;
    assert_eq!(bound.supplied(), 6);
    assert_eq!(bound.unsigned(0), 7);
    assert_eq!(bound.signed(1), -3);
    assert_eq!(bound.text(2), "hello");
    assert_eq!(bound.text(3), "chan");
    assert!(bound.boolean(4));
    assert_eq!(bound.variant(5), &Value::from("raw"));
    Ok(())
}

#[test]
fn negative_unsigned_saturates_to_zero() -> anyhow::Result<()> {
    let bound = bind(&Signature::fixed(OPTIONALS), vec![Value::from("-5")])?;
    assert_eq!(bound.unsigned(0), 0);
    assert!(bound.is_supplied(0));
    assert!(!bound.is_supplied(1));
    Ok(())
}

#[test]
fn missing_required_argument_fails() {
    let error = bind(&Signature::fixed(REQUIRED), Vec::new()).unwrap_err();
    assert_eq!(
        error,
        BindingError::MissingRequiredArgument {
            parameter: "format"
        }
    );
    assert_eq!(error.to_string(), "missing required argument 'format'");
}

#[test]
fn empty_non_empty_string_fails() {
    let error = bind(&Signature::fixed(REQUIRED), vec![Value::from("")]).unwrap_err();
    assert_eq!(
        error,
        BindingError::EmptyStringNotAllowed {
            parameter: "format"
        }
    );

    let error = bind(&Signature::fixed(REQUIRED), vec![Value::Nothing]).unwrap_err();
    assert!(matches!(error, BindingError::EmptyStringNotAllowed { .. }));
}

#[test]
fn extra_arguments_are_ignored_for_fixed_signatures() -> anyhow::Result<()> {
    let args = vec![Value::from("Y"), Value::from("10"), Value::from("extra")];
    let bound = bind(&Signature::fixed(REQUIRED), args)?;
    assert_eq!(bound.supplied(), 2);
    assert!(bound.rest().is_empty());
    Ok(())
}

#[test]
fn variadic_signatures_keep_the_remainder_raw() -> anyhow::Result<()> {
    const HEAD: &[Param] = &[required("first", ParamKind::Signed)];
    let args = vec![Value::from("1"), Value::from("two"), Value::Nothing];
    let bound = bind(&Signature::variadic(HEAD), args)?;
    assert_eq!(bound.signed(0), 1);
    assert_eq!(bound.rest(), &[Value::from("two"), Value::Nothing]);
    Ok(())
}

#[test]
fn variant_parameters_take_containers_untouched() -> anyhow::Result<()> {
    const DATA: &[Param] = &[required("data", ParamKind::Variant)];
    let array: chirp_core::Array = vec![Value::from("x")].into_iter().collect();
    let bound = bind(&Signature::fixed(DATA), vec![Value::from(array.clone())])?;
    assert_eq!(bound.variant(0), &Value::from(array));
    Ok(())
}

#[test]
fn string_parameters_flatten_containers_to_text() -> anyhow::Result<()> {
    const TEXT: &[Param] = &[required("text", ParamKind::String)];
    let array: chirp_core::Array = vec![Value::from("a"), Value::from("b")].into_iter().collect();
    let bound = bind(&Signature::fixed(TEXT), vec![Value::from(array)])?;
    assert_eq!(bound.text(0), "a,b");
    Ok(())
}

#[test]
fn signatures_render_their_contract() {
    assert_eq!(
        Signature::fixed(REQUIRED).to_string(),
        "(<format:non-empty string>, [unixtime:int])"
    );
    assert_eq!(Signature::variadic(&[]).to_string(), "(...)");
}
