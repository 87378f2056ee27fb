//! Procedural macros for the puzzle-solver library

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput, Lit};

/// Derive macro generating the `Solver` impl from `PartSolver` impls
///
/// The annotated type must implement `PuzzleParser` and `PartSolver<N>` for
/// every `N` in `1..=max_parts`. The generated `Solver` impl sets
/// `PARTS = max_parts` and dispatches `solve_part(shared, k)` to the matching
/// `PartSolver<k>::solve`; any other part number yields
/// `SolveError::PartNotImplemented`.
///
/// # Attributes
///
/// - `max_parts`: Required. Number of parts the solver implements (1-25).
///
/// # Example
///
/// ```ignore
/// #[derive(PuzzleSolver)]
/// #[puzzle_solver(max_parts = 2)]
/// struct Day2Solver;
///
/// impl PuzzleParser for Day2Solver { /* ... */ }
/// impl PartSolver<1> for Day2Solver { /* ... */ }
/// impl PartSolver<2> for Day2Solver { /* ... */ }
/// ```
#[proc_macro_derive(PuzzleSolver, attributes(puzzle_solver))]
pub fn derive_puzzle_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("puzzle_solver"))
        .expect("PuzzleSolver derive macro requires #[puzzle_solver(...)] attribute");

    let mut max_parts: Option<u8> = None;

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("max_parts") {
            let value: Lit = meta.value()?.parse()?;
            if let Lit::Int(lit_int) = value {
                max_parts = Some(lit_int.base10_parse()?);
            }
        }
        Ok(())
    })
    .expect("Failed to parse #[puzzle_solver(...)] attribute");

    let max_parts = max_parts.expect("Missing required 'max_parts' attribute");
    assert!(
        (1..=25).contains(&max_parts),
        "'max_parts' must be between 1 and 25"
    );

    let arms = (1..=max_parts).map(|part| {
        let lit = proc_macro2::Literal::u8_unsuffixed(part);
        quote! {
            #lit => <#name as ::puzzle_solver::PartSolver<#lit>>::solve(shared),
        }
    });

    let expanded = quote! {
        impl ::puzzle_solver::Solver for #name {
            const PARTS: u8 = #max_parts;

            fn solve_part(
                shared: &mut Self::SharedData<'_>,
                part: u8,
            ) -> ::core::result::Result<::std::string::String, ::puzzle_solver::SolveError> {
                match part {
                    #(#arms)*
                    _ => ::core::result::Result::Err(
                        ::puzzle_solver::SolveError::PartNotImplemented(part),
                    ),
                }
            }
        }
    };

    TokenStream::from(expanded)
}

/// Derive macro for automatically registering solvers with the plugin system
///
/// Generates an `inventory::submit!` of a `SolverPlugin`, allowing the solver
/// to be discovered by `RegistryBuilder::register_all_plugins` without any
/// manual registration call.
///
/// # Attributes
///
/// - `year`: Required. The puzzle event year (e.g., 2023)
/// - `day`: Required. The day number (1-25)
/// - `tags`: Optional. Array of string literals for filtering (e.g., ["grid"])
///
/// # Requirements
///
/// The type must implement the `Solver` trait. If the trait is not
/// implemented, the generated compile-time check reports an unsatisfied
/// trait bound on the solver type.
///
/// # Example
///
/// ```ignore
/// #[derive(PuzzleSolver, AutoRegisterSolver)]
/// #[puzzle_solver(max_parts = 2)]
/// #[puzzle(year = 2023, day = 2, tags = ["2023", "parsing"])]
/// struct Day2Solver;
/// ```
#[proc_macro_derive(AutoRegisterSolver, attributes(puzzle))]
pub fn derive_auto_register_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("puzzle"))
        .expect("AutoRegisterSolver derive macro requires #[puzzle(...)] attribute");

    let mut year: Option<u16> = None;
    let mut day: Option<u8> = None;
    let mut tags: Vec<String> = Vec::new();

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("year") {
            let value: Lit = meta.value()?.parse()?;
            if let Lit::Int(lit_int) = value {
                year = Some(lit_int.base10_parse()?);
            }
        } else if meta.path.is_ident("day") {
            let value: Lit = meta.value()?.parse()?;
            if let Lit::Int(lit_int) = value {
                day = Some(lit_int.base10_parse()?);
            }
        } else if meta.path.is_ident("tags") {
            // tags = ["a", "b"]
            let _ = meta.value()?;
            let content;
            syn::bracketed!(content in meta.input);
            while !content.is_empty() {
                let lit: Lit = content.parse()?;
                if let Lit::Str(lit_str) = lit {
                    tags.push(lit_str.value());
                }
                if content.peek(syn::Token![,]) {
                    let _: syn::Token![,] = content.parse()?;
                }
            }
        }
        Ok(())
    })
    .expect("Failed to parse #[puzzle(...)] attribute");

    let year = year.expect("Missing required 'year' attribute");
    let day = day.expect("Missing required 'day' attribute");

    let tags_array = if tags.is_empty() {
        quote! { &[] }
    } else {
        let tag_strs = tags.iter().map(|s| s.as_str());
        quote! { &[#(#tag_strs),*] }
    };

    let expanded = quote! {
        // Compile-time check that the type implements the Solver trait, so a
        // missing impl is reported on the solver type rather than inside the
        // generated registration code.
        const _: () = {
            trait MustImplementSolver: ::puzzle_solver::Solver {}
            impl MustImplementSolver for #name {}
        };

        ::puzzle_solver::inventory::submit! {
            ::puzzle_solver::SolverPlugin {
                year: #year,
                day: #day,
                solver: &#name,
                tags: #tags_array,
            }
        }
    };

    TokenStream::from(expanded)
}
