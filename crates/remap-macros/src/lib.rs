extern crate proc_macro;

use proc_macro::TokenStream;

#[proc_macro_derive(Mappable, attributes(mappable))]
pub fn derive_mappable(input: TokenStream) -> TokenStream {
    match remap_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
