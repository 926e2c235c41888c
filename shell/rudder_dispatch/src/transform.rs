//! Named/flag parameter extraction.
//!
//! Turns a raw argument bag like `--level value2 --force arg3` into the
//! ordered argument list a candidate's parameter declaration expects:
//! flag-derived values first, in parameter declaration order, then the
//! surviving positional arguments in their original relative order.

use rudder_values::Value;

use crate::catalog::Operation;

/// Extract flag parameters and merge with positional arguments.
///
/// Returns `None` when a flag that requires a following value is the
/// last remaining token; the caller rejects this candidate and keeps
/// searching, it is not a hard error.
pub(crate) fn transform_parameters(op: &Operation, raw: &[Value]) -> Option<Vec<Value>> {
    let mut rest: Vec<Value> = raw.to_vec();
    let mut out: Vec<Value> = Vec::with_capacity(op.params().len());

    for param in op.params() {
        let Some(meta) = param.meta() else { continue };

        let found = meta
            .names()
            .iter()
            .find_map(|alias| rest.iter().position(|arg| arg.as_str() == Some(&**alias)));

        match found {
            Some(i) => {
                rest.remove(i);
                match meta.present() {
                    // Boolean-style flag: the presence value is used and
                    // no further token is consumed.
                    Some(value) => out.push(value.clone()),
                    // The value must follow the alias.
                    None => {
                        if i >= rest.len() {
                            return None;
                        }
                        out.push(rest.remove(i));
                    }
                }
            }
            None => out.push(meta.absent().clone()),
        }
    }

    out.extend(rest);
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Operation, ParamSpec};
    use pretty_assertions::assert_eq;
    use rudder_values::TypeSig;

    fn verbose_flag() -> ParamSpec {
        ParamSpec::flag(
            TypeSig::Bool,
            &["--verbose", "-v"],
            Some(Value::Bool(true)),
            Value::Bool(false),
        )
    }

    fn level_flag() -> ParamSpec {
        ParamSpec::flag(TypeSig::Str, &["--level"], None, Value::string("info"))
    }

    fn op(params: Vec<ParamSpec>) -> Operation {
        Operation::new("copy", params, |_, _| Ok(Value::Void))
    }

    #[test]
    fn boolean_flag_is_position_independent() {
        let op = op(vec![verbose_flag(), ParamSpec::positional(TypeSig::Str)]);

        let before = transform_parameters(&op, &[Value::string("-v"), Value::string("src")]);
        let after = transform_parameters(&op, &[Value::string("src"), Value::string("-v")]);

        let expected = Some(vec![Value::Bool(true), Value::string("src")]);
        assert_eq!(before, expected);
        assert_eq!(after, expected);
    }

    #[test]
    fn absent_flag_uses_absent_value() {
        let op = op(vec![verbose_flag(), ParamSpec::positional(TypeSig::Str)]);
        let out = transform_parameters(&op, &[Value::string("src")]);
        assert_eq!(out, Some(vec![Value::Bool(false), Value::string("src")]));
    }

    #[test]
    fn valued_flag_consumes_the_following_token() {
        let op = op(vec![level_flag(), ParamSpec::positional(TypeSig::Str)]);
        let out = transform_parameters(
            &op,
            &[
                Value::string("--level"),
                Value::string("debug"),
                Value::string("src"),
            ],
        );
        assert_eq!(
            out,
            Some(vec![Value::string("debug"), Value::string("src")])
        );
    }

    #[test]
    fn valued_flag_takes_the_token_at_its_own_position() {
        let op = op(vec![level_flag(), ParamSpec::positional(TypeSig::Str)]);
        let out = transform_parameters(
            &op,
            &[
                Value::string("src"),
                Value::string("--level"),
                Value::string("debug"),
            ],
        );
        assert_eq!(
            out,
            Some(vec![Value::string("debug"), Value::string("src")])
        );
    }

    #[test]
    fn trailing_valueless_flag_fails_the_transform() {
        let op = op(vec![level_flag()]);
        let out = transform_parameters(&op, &[Value::string("--level")]);
        assert_eq!(out, None);
    }

    #[test]
    fn any_alias_matches() {
        let op = op(vec![verbose_flag()]);
        let long = transform_parameters(&op, &[Value::string("--verbose")]);
        let short = transform_parameters(&op, &[Value::string("-v")]);
        assert_eq!(long, Some(vec![Value::Bool(true)]));
        assert_eq!(short, Some(vec![Value::Bool(true)]));
    }

    #[test]
    fn flags_come_before_positionals_in_declaration_order() {
        let op = op(vec![
            verbose_flag(),
            level_flag(),
            ParamSpec::positional(TypeSig::Str),
            ParamSpec::positional(TypeSig::Str),
        ]);
        let out = transform_parameters(
            &op,
            &[
                Value::string("a"),
                Value::string("--level"),
                Value::string("warn"),
                Value::string("b"),
                Value::string("-v"),
            ],
        );
        assert_eq!(
            out,
            Some(vec![
                Value::Bool(true),
                Value::string("warn"),
                Value::string("a"),
                Value::string("b"),
            ])
        );
    }

    #[test]
    fn non_string_tokens_never_match_aliases() {
        let op = op(vec![verbose_flag(), ParamSpec::positional(TypeSig::Long)]);
        let out = transform_parameters(&op, &[Value::long(7)]);
        assert_eq!(out, Some(vec![Value::Bool(false), Value::long(7)]));
    }
}
