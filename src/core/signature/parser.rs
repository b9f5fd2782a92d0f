//! Declaration signature parsing.
//!
//! Understands just enough of a C++ declaration to read its name, return type and
//! parameter list; everything else is carried along as opaque text.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::data::{Parameter, ParsedSignature};
use crate::core::utils::{collapse_whitespace, last_identifier, trailing_identifier};

/// Storage, linkage and calling-convention keywords dropped from return types.
const FUNCTION_SPECIFIERS: &[&str] = &[
    "inline",
    "constexpr",
    "virtual",
    "explicit",
    "friend",
    "static",
    "extern",
    "__stdcall",
    "__cdecl",
    "__thiscall",
    "__fastcall",
    "noexcept",
    "mutable",
];

/// Words that can precede a type without naming a parameter (`const Foo&`).
const TYPE_QUALIFIERS: &[&str] = &["const", "volatile", "struct", "class", "enum", "typename"];

/// Builtin type words; a parameter "named" like this is really anonymous (`unsigned int`).
const BUILTIN_TYPES: &[&str] = &[
    "void", "bool", "char", "wchar_t", "char8_t", "char16_t", "char32_t", "short", "int",
    "long", "float", "double", "signed", "unsigned", "auto", "const", "volatile",
];

static OPERATOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\boperator(?:\s*(\(\)|\[\]|<=>|<<=|>>=|->\*|->|<<|>>|==|!=|<=|>=|&&|\|\||\+\+|--|\+=|-=|\*=|/=|%=|\^=|&=|\|=|<|>|\+|-|\*|/|%|\^|&|\||~|!|=|,)|\s+(\w+(?:::\w+)*))",
    )
    .unwrap()
});

/// Parse one normalized declaration.
///
/// `class_name` is the short name of the enclosing class: a declaration named like it is
/// a constructor and gets an empty return type. Declarations wrapped in one of
/// `wrapper_macros` (`GX_API_FUNC(void f(int a));`) are unwrapped first.
///
/// Returns `None` when no parameter list can be found.
pub fn parse_signature<S: AsRef<str>>(
    signature: &str,
    class_name: &str,
    wrapper_macros: &[S],
) -> Option<ParsedSignature> {
    let normalized = collapse_whitespace(signature);
    let sig = unwrap_macro(&normalized, wrapper_macros);

    let (open, close) = find_parameter_list(sig)?;
    let head = sig[..open].trim();
    let (name, return_type) = split_name_and_return_type(head, class_name);

    Some(ParsedSignature {
        name,
        return_type,
        params: parse_parameters(&sig[open + 1..close]),
    })
}

/// `MACRO(inner)` -> `inner` when `MACRO` is in the allow-list.
fn unwrap_macro<'a, S: AsRef<str>>(sig: &'a str, wrapper_macros: &[S]) -> &'a str {
    let (Some(open), Some(close)) = (sig.find('('), sig.rfind(')')) else {
        return sig;
    };
    if open >= close {
        return sig;
    }

    let prefix = sig[..open].trim();
    if wrapper_macros.iter().any(|m| m.as_ref() == prefix) {
        sig[open + 1..close].trim()
    } else {
        sig
    }
}

/// Byte positions of the parameter list's `(` and its matching `)`.
fn find_parameter_list(sig: &str) -> Option<(usize, usize)> {
    let mut open = sig.find('(')?;

    // `operator()(...)`: the first parentheses are part of the name.
    if is_call_operator_head(&sig[..open]) && sig[open..].starts_with("()") {
        open = open + 2 + sig[open + 2..].find('(')?;
    }

    let mut depth = 0usize;
    for (i, ch) in sig[open..].char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some((open, open + i));
                }
            }
            _ => {}
        }
    }
    None
}

fn is_call_operator_head(head: &str) -> bool {
    let head = head.trim_end();
    head.strip_suffix("operator")
        .is_some_and(|before| !before.ends_with(|c: char| c.is_alphanumeric() || c == '_'))
}

fn split_name_and_return_type(head: &str, class_name: &str) -> (String, String) {
    if let Some(caps) = OPERATOR_REGEX.captures(head) {
        let start = caps.get(0).map_or(0, |m| m.start());
        let name = match (caps.get(1), caps.get(2)) {
            (Some(symbol), _) => format!("operator{}", symbol.as_str()),
            // Conversion operators are named by their whole target type.
            (None, Some(_)) => format!("operator {}", head[start + "operator".len()..].trim()),
            (None, None) => "operator".to_string(),
        };
        return (name, remove_specifiers(&head[..start]));
    }

    let Some(range) = last_identifier(head) else {
        return (String::new(), remove_specifiers(head));
    };

    let name = head[range.clone()].to_string();
    let return_type = if name == class_name {
        String::new()
    } else {
        remove_specifiers(&head[..range.start])
    };
    (name, return_type)
}

fn remove_specifiers(text: &str) -> String {
    text.split_whitespace()
        .filter(|token| !FUNCTION_SPECIFIERS.contains(token))
        .filter(|token| !(token.starts_with("[[") && token.ends_with("]]")))
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_parameters(inside: &str) -> Vec<Parameter> {
    if inside.trim() == "void" {
        return Vec::new();
    }

    let mut unnamed = 0;
    split_top_level(inside)
        .into_iter()
        .filter_map(|raw| parse_parameter(raw, &mut unnamed))
        .collect()
}

/// Split on commas that are not nested in `<>`, `()`, `[]` or `{}`.
fn split_top_level(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, ch) in text.char_indices() {
        match ch {
            '<' | '(' | '[' | '{' => depth += 1,
            '>' | ')' | ']' | '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);
    parts
}

fn parse_parameter(raw: &str, unnamed: &mut usize) -> Option<Parameter> {
    let has_default = raw.contains('=');
    let decl = match raw.find('=') {
        Some(eq) => raw[..eq].trim(),
        None => raw.trim(),
    };
    if decl.is_empty() {
        return None;
    }

    // `int values[4]`: the bracket suffix belongs to the type.
    let (core, suffix) = match decl.find('[') {
        Some(idx) if decl.ends_with(']') => (decl[..idx].trim_end(), &decl[idx..]),
        _ => (decl, ""),
    };

    if let Some(range) = trailing_identifier(core) {
        let name = &core[range.clone()];
        let ty = core[..range.start].trim();
        if !is_anonymous(ty, name) {
            return Some(Parameter::new(format!("{ty}{suffix}"), name, has_default));
        }
    }

    let name = format!("arg{}", *unnamed);
    *unnamed += 1;
    Some(Parameter::new(decl, name, has_default))
}

fn is_anonymous(ty: &str, name: &str) -> bool {
    ty.is_empty()
        || ty.ends_with("::")
        || BUILTIN_TYPES.contains(&name)
        || ty.split_whitespace().all(|word| TYPE_QUALIFIERS.contains(&word))
}
