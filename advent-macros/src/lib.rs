//! Derive macros for advent-core solvers

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{DeriveInput, Lit, LitInt, LitStr, parse_macro_input};

/// Generates `Solver` for a type whose parts are written as `PartSolver<N>` impls.
///
/// # Attributes
///
/// - `parts`: Required. Number of parts, each of which needs a `PartSolver<N>` impl.
///
/// # Example
///
/// ```ignore
/// #[derive(AocSolver)]
/// #[aoc_solver(parts = 2)]
/// struct Chiton;
///
/// impl AocParser for Chiton { /* ... */ }
/// impl PartSolver<1> for Chiton { /* ... */ }
/// impl PartSolver<2> for Chiton { /* ... */ }
/// ```
///
/// A missing `PartSolver<N>` impl is reported by the compiler as an
/// unsatisfied trait bound on the generated dispatcher.
#[proc_macro_derive(AocSolver, attributes(aoc_solver))]
pub fn derive_aoc_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_aoc_solver(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_aoc_solver(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("aoc_solver"))
        .ok_or_else(|| {
            syn::Error::new_spanned(name, "AocSolver derive requires #[aoc_solver(parts = N)]")
        })?;

    let mut parts: Option<u8> = None;
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("parts") {
            let lit: LitInt = meta.value()?.parse()?;
            parts = Some(lit.base10_parse()?);
            Ok(())
        } else {
            Err(meta.error("unsupported aoc_solver attribute, expected `parts`"))
        }
    })?;

    let parts = parts.ok_or_else(|| syn::Error::new_spanned(attr, "missing `parts`"))?;
    if parts == 0 {
        return Err(syn::Error::new_spanned(attr, "`parts` must be at least 1"));
    }

    let arms = (1..=parts).map(|n| {
        let n = proc_macro2::Literal::u8_unsuffixed(n);
        quote! {
            #n => <Self as ::advent_core::PartSolver<#n>>::solve(shared),
        }
    });

    Ok(quote! {
        impl ::advent_core::Solver for #name {
            const PARTS: u8 = #parts;

            fn solve_part(
                shared: &mut <Self as ::advent_core::AocParser>::SharedData<'_>,
                part: u8,
            ) -> ::core::result::Result<::std::string::String, ::advent_core::SolveError> {
                match part {
                    #(#arms)*
                    _ => ::core::result::Result::Err(::advent_core::SolveError::PartNotImplemented(part)),
                }
            }
        }
    })
}

/// Submits a solver to the global plugin list so the runner can discover it.
///
/// # Attributes
///
/// - `year`: Required. Event year, e.g. 2021
/// - `day`: Required. Day number, 1-25
/// - `title`: Required. Puzzle title, used as the output label
/// - `tags`: Optional. String literals for filtering, e.g. `["grid", "parsing"]`
///
/// The type must implement `Solver` (usually via `#[derive(AocSolver)]`).
///
/// # Example
///
/// ```ignore
/// #[derive(AocSolver, Puzzle)]
/// #[aoc_solver(parts = 2)]
/// #[puzzle(year = 2021, day = 15, title = "Chiton", tags = ["grid", "dijkstra"])]
/// pub struct Chiton;
/// ```
#[proc_macro_derive(Puzzle, attributes(puzzle))]
pub fn derive_puzzle(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_puzzle(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_puzzle(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("puzzle"))
        .ok_or_else(|| {
            syn::Error::new_spanned(
                name,
                "Puzzle derive requires #[puzzle(year = .., day = .., title = \"..\")]",
            )
        })?;

    let mut year: Option<u16> = None;
    let mut day: Option<u8> = None;
    let mut title: Option<LitStr> = None;
    let mut tags: Vec<LitStr> = Vec::new();

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("year") {
            let lit: LitInt = meta.value()?.parse()?;
            year = Some(lit.base10_parse()?);
        } else if meta.path.is_ident("day") {
            let lit: LitInt = meta.value()?.parse()?;
            let value: u8 = lit.base10_parse()?;
            if !(1..=25).contains(&value) {
                return Err(syn::Error::new_spanned(lit, "day must be between 1 and 25"));
            }
            day = Some(value);
        } else if meta.path.is_ident("title") {
            title = Some(meta.value()?.parse()?);
        } else if meta.path.is_ident("tags") {
            // tags = ["a", "b"]
            let _ = meta.value()?;
            let content;
            syn::bracketed!(content in meta.input);
            while !content.is_empty() {
                match content.parse::<Lit>()? {
                    Lit::Str(lit) => tags.push(lit),
                    other => return Err(syn::Error::new_spanned(other, "tags must be string literals")),
                }
                if content.peek(syn::Token![,]) {
                    let _: syn::Token![,] = content.parse()?;
                }
            }
        } else {
            return Err(meta.error("unsupported puzzle attribute, expected year, day, title or tags"));
        }
        Ok(())
    })?;

    let missing = |what: &str| syn::Error::new(Span::call_site(), format!("#[puzzle] is missing `{what}`"));
    let year = year.ok_or_else(|| missing("year"))?;
    let day = day.ok_or_else(|| missing("day"))?;
    let title = title.ok_or_else(|| missing("title"))?;

    Ok(quote! {
        const _: () = {
            trait MustImplementSolver: ::advent_core::Solver {}
            impl MustImplementSolver for #name {}
        };

        ::advent_core::inventory::submit! {
            ::advent_core::SolverPlugin {
                year: #year,
                day: #day,
                title: #title,
                solver: &#name,
                tags: &[#(#tags),*],
            }
        }
    })
}
