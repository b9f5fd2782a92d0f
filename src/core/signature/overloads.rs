use crate::core::data::ParsedSignature;

/// Expand trailing default parameters into one signature per callable arity.
///
/// Every overload keeps all parameters up to the last one without a default; the rest
/// are appended one at a time. `f(int a, int b = 0, int c = 0)` yields `f(a)`,
/// `f(a, b)` and `f(a, b, c)`, in that order.
pub fn generate_overloads(signature: &ParsedSignature) -> Vec<ParsedSignature> {
    let required = signature
        .params
        .iter()
        .rposition(|p| !p.has_default)
        .map_or(0, |i| i + 1);

    (required..=signature.params.len())
        .map(|count| ParsedSignature {
            name: signature.name.clone(),
            return_type: signature.return_type.clone(),
            params: signature.params[..count].to_vec(),
        })
        .collect()
}
