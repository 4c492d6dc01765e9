use crate::util::{erase_lifetimes, is_path_ident};
use darling::{Error as DarlingError, FromDeriveInput, FromField, ast::Data, util::Ignored};
use proc_macro2::TokenStream;
use quote::quote;
use structq_grammar::{Directive, FieldExpr};
use syn::{DeriveInput, GenericParam, Generics, Ident, LitStr, Type, ext::IdentExt};

// derive_filter
pub fn derive_filter(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    FilterInput::from_derive_input(&input)
        .and_then(|input| input.expand())
        .unwrap_or_else(DarlingError::write_errors)
}

///
/// FilterInput
///

#[derive(FromDeriveInput)]
#[darling(supports(struct_named))]
struct FilterInput {
    ident: Ident,
    generics: Generics,
    data: Data<Ignored, FilterField>,
}

impl FilterInput {
    fn expand(&self) -> Result<TokenStream, DarlingError> {
        let mut errors = DarlingError::accumulator();

        // the model is a static, which cannot mention type parameters
        for param in &self.generics.params {
            if !matches!(param, GenericParam::Lifetime(_)) {
                errors.push(
                    DarlingError::custom(
                        "Filter cannot be derived for types with type or const parameters",
                    )
                    .with_span(param),
                );
            }
        }

        let fields: Vec<(&Ident, &FilterField)> = match &self.data {
            Data::Struct(fields) => fields
                .iter()
                .filter_map(|field| field.ident.as_ref().map(|ident| (ident, field)))
                .collect(),
            Data::Enum(_) => Vec::new(),
        };
        for (_, field) in &fields {
            errors.handle(field.validate());
        }
        errors.finish()?;

        let ident = &self.ident;
        let name = ident.unraw().to_string();
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();

        let entries = fields
            .iter()
            .map(|(ident, field)| field.model_entry(&ident.unraw().to_string()));
        let arms = fields
            .iter()
            .enumerate()
            .map(|(index, (ident, field))| field.slot_arm(index, ident));

        Ok(quote! {
            impl #impl_generics ::structq::traits::Filter for #ident #ty_generics #where_clause {
                fn model(&self) -> &'static ::structq::model::FilterModel {
                    #[allow(unused_imports)]
                    use ::structq::model::{FieldKind, FieldModel, FieldType, FilterModel};

                    static MODEL: FilterModel = FilterModel {
                        name: #name,
                        fields: &[#(#entries),*],
                    };

                    &MODEL
                }

                fn slot(&self, index: usize) -> ::structq::model::Slot<'_> {
                    match index {
                        #(#arms)*
                        _ => ::structq::model::Slot::Absent,
                    }
                }
            }
        })
    }
}

///
/// FilterField
///

#[derive(FromField)]
#[darling(attributes(filter))]
struct FilterField {
    ident: Option<Ident>,
    ty: Type,

    #[darling(default)]
    op: Option<LitStr>,

    #[darling(default)]
    field: Option<LitStr>,

    #[darling(default)]
    nested: bool,

    #[darling(default)]
    embed: bool,
}

impl FilterField {
    const fn is_record(&self) -> bool {
        self.nested || self.embed
    }

    fn validate(&self) -> Result<(), DarlingError> {
        let mut errors = DarlingError::accumulator();

        if self.nested && self.embed {
            errors.push(
                DarlingError::custom("`nested` and `embed` cannot be combined").with_span(&self.ty),
            );
        }

        if self.is_record() {
            for tag in [&self.op, &self.field].into_iter().flatten() {
                errors.push(
                    DarlingError::custom("sub-record fields take no `op` or `field` tag")
                        .with_span(tag),
                );
            }
        }

        if let Some(op) = &self.op {
            let value = op.value();
            if let Err(err) = Directive::parse_strict(&value) {
                errors.push(DarlingError::custom(err).with_span(op));
            }
        }

        // an empty `field` tag falls back to the derived column name
        if let Some(field) = &self.field {
            let value = field.value();
            if !value.trim().is_empty()
                && let Err(err) = FieldExpr::parse(&value).and_then(|expr| expr.check_balanced())
            {
                errors.push(DarlingError::custom(err).with_span(field));
            }
        }

        errors.finish()
    }

    fn model_entry(&self, name: &str) -> TokenStream {
        let base = if self.is_record() {
            let optional = is_path_ident(&self.ty, "Option").then(|| quote!(.optional()));
            let role = if self.embed {
                quote!(.embedded())
            } else {
                quote!(.nested())
            };

            quote!(FieldModel::new(#name, FieldType::scalar(FieldKind::Record) #optional) #role)
        } else {
            let ty = erase_lifetimes(&self.ty);

            quote!(FieldModel::new(#name, <#ty as ::structq::traits::FilterValue>::TYPE))
        };

        let op = self.op.as_ref().map(|op| quote!(.op(#op)));
        let column = self.field.as_ref().map(|field| quote!(.column(#field)));

        quote!(#base #op #column)
    }

    fn slot_arm(&self, index: usize, ident: &Ident) -> TokenStream {
        if !self.is_record() {
            return quote! {
                #index => ::structq::traits::FilterValue::to_slot(&self.#ident),
            };
        }

        if is_path_ident(&self.ty, "Option") {
            quote! {
                #index => match &self.#ident {
                    Some(inner) => ::structq::model::Slot::Record(inner),
                    None => ::structq::model::Slot::Absent,
                },
            }
        } else {
            quote! {
                #index => ::structq::model::Slot::Record(&self.#ident),
            }
        }
    }
}
