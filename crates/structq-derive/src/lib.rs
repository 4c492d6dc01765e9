use proc_macro::TokenStream;

mod filter;
mod util;

/// Derive `structq::traits::Filter` for a struct with named fields.
///
/// Field attributes, all optional:
///
/// - `#[filter(op = "...")]`: operator, `page`, `size`, `asc`, `desc`, a raw
///   template containing `?`, or `-` to skip the field
/// - `#[filter(field = "...")]`: column expression such as `a&(b|c)`
/// - `#[filter(nested)]`: sub-record compiled as an AND group
/// - `#[filter(embed)]`: sub-record compiled as an OR group
///
/// Tags are checked here, so a malformed one is a compile error.
#[proc_macro_derive(Filter, attributes(filter))]
pub fn derive_filter(input: TokenStream) -> TokenStream {
    filter::derive_filter(input.into()).into()
}
