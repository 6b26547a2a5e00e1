//! Template generation code for Config derive macro.

use proc_macro2::TokenStream;
use quote::quote;
use syn::Type;

use super::FieldInfo;

/// Convert syn::Type to string representation
fn type_to_string(ty: &Type) -> String {
    quote!(#ty).to_string().replace(' ', "")
}

/// Fallback template value when no `default` attribute is given
fn fallback_value(ty: &str) -> &'static str {
    match ty {
        "bool" => "false",
        _ if ty.starts_with("Vec<") => "[]",
        _ => "\"\"",
    }
}

/// Generate template code (TokenStream) for fields
pub fn generate_template_code(fields: &[&FieldInfo]) -> TokenStream {
    let field_codes: Vec<TokenStream> = fields
        .iter()
        .map(|f| generate_field_template_code(f))
        .collect();

    quote! {
        #(#field_codes)*
    }
}

/// Generate TOML template code for a single field
fn generate_field_template_code(info: &FieldInfo) -> TokenStream {
    let doc_code = if let Some(ref doc) = info.doc {
        let doc_str: String = doc.lines().map(|l| format!("# {}\n", l.trim())).collect();
        quote! { out.push_str(#doc_str); }
    } else {
        quote! {}
    };

    // Sub sections carry their own header and go after plain keys
    if info.sub {
        let field_ty = &info.ty;
        return quote! {
            out.push('\n');
            out.push_str(&<#field_ty>::template_with_header());
        };
    }

    let ty_str = type_to_string(&info.ty);
    let value = info
        .default
        .clone()
        .unwrap_or_else(|| fallback_value(&ty_str).to_string());

    // Optional keys stay commented out
    let prefix = if ty_str.starts_with("Option<") { "# " } else { "" };
    let line = format!("{}{} = {}\n", prefix, info.toml_name, value);

    quote! {
        #doc_code
        out.push_str(#line);
    }
}
