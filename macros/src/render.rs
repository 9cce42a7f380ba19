//! Expansion-time rendering of written types.
//!
//! The runtime normalizer trims a compiler-emitted spelling; here the input
//! is source tokens instead, so the renderer walks `syn::Type` and writes
//! the same surface syntax the compiler uses in its spellings. Keeping the
//! spacing conventions identical is what lets `static_name!(Vec<i32>)`
//! agree with runtime resolution of the same type.

use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::punctuated::Punctuated;
use syn::{
    AngleBracketedGenericArguments, GenericArgument, Path, PathArguments, PathSegment, QSelf,
    ReturnType, Token, TraitBoundModifier, Type, TypeParamBound,
};

/// Path rendering mode.
pub enum Paths {
    /// Final segment of each written path.
    Short,
    /// Every written segment.
    Full,
}

pub fn expand_static_name(ty: &Type, paths: Paths) -> TokenStream {
    match render_type(ty, &paths) {
        Ok(name) => quote::quote! { #name },
        Err(err) => err.to_compile_error(),
    }
}

fn render_type(ty: &Type, paths: &Paths) -> syn::Result<String> {
    let mut out = String::new();
    write_type(ty, paths, &mut out)?;
    Ok(out)
}

fn write_type(ty: &Type, paths: &Paths, out: &mut String) -> syn::Result<()> {
    match ty {
        Type::Path(tp) => write_path(tp.qself.as_ref(), &tp.path, paths, out),
        Type::Reference(r) => {
            out.push('&');
            if let Some(lt) = &r.lifetime {
                out.push_str(&lt.to_string());
                out.push(' ');
            }
            if r.mutability.is_some() {
                out.push_str("mut ");
            }
            write_type(&r.elem, paths, out)
        }
        Type::Ptr(p) => {
            out.push('*');
            out.push_str(if p.mutability.is_some() {
                "mut "
            } else {
                "const "
            });
            write_type(&p.elem, paths, out)
        }
        Type::Slice(s) => {
            out.push('[');
            write_type(&s.elem, paths, out)?;
            out.push(']');
            Ok(())
        }
        Type::Array(a) => {
            out.push('[');
            write_type(&a.elem, paths, out)?;
            out.push_str("; ");
            out.push_str(&tokens(&a.len));
            out.push(']');
            Ok(())
        }
        Type::Tuple(t) => {
            out.push('(');
            for (i, elem) in t.elems.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_type(elem, paths, out)?;
            }
            if t.elems.len() == 1 {
                out.push(',');
            }
            out.push(')');
            Ok(())
        }
        Type::BareFn(f) => {
            if let Some(lts) = &f.lifetimes {
                out.push_str("for<");
                for (i, param) in lts.lifetimes.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    out.push_str(&tokens(param));
                }
                out.push_str("> ");
            }
            if f.unsafety.is_some() {
                out.push_str("unsafe ");
            }
            if let Some(abi) = &f.abi {
                out.push_str("extern");
                if let Some(name) = &abi.name {
                    out.push_str(" \"");
                    out.push_str(&name.value());
                    out.push('"');
                }
                out.push(' ');
            }
            out.push_str("fn(");
            for (i, arg) in f.inputs.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_type(&arg.ty, paths, out)?;
            }
            if f.variadic.is_some() {
                if !f.inputs.is_empty() {
                    out.push_str(", ");
                }
                out.push_str("...");
            }
            out.push(')');
            if let ReturnType::Type(_, ret) = &f.output {
                out.push_str(" -> ");
                write_type(ret, paths, out)?;
            }
            Ok(())
        }
        Type::TraitObject(t) => {
            out.push_str("dyn ");
            write_bounds(&t.bounds, paths, out)
        }
        Type::ImplTrait(t) => {
            out.push_str("impl ");
            write_bounds(&t.bounds, paths, out)
        }
        Type::Paren(p) => {
            out.push('(');
            write_type(&p.elem, paths, out)?;
            out.push(')');
            Ok(())
        }
        Type::Group(g) => write_type(&g.elem, paths, out),
        Type::Never(_) => {
            out.push('!');
            Ok(())
        }
        other => Err(syn::Error::new_spanned(
            other,
            "static_name! cannot render this type form",
        )),
    }
}

fn write_path(
    qself: Option<&QSelf>,
    path: &Path,
    paths: &Paths,
    out: &mut String,
) -> syn::Result<()> {
    let segments: Vec<&PathSegment> = path.segments.iter().collect();

    if let Some(q) = qself {
        // `<Self as Trait>::Assoc` keeps its structure; only the inner
        // paths are trimmed
        out.push('<');
        write_type(&q.ty, paths, out)?;
        if q.position > 0 {
            out.push_str(" as ");
            for (i, seg) in segments[..q.position].iter().enumerate() {
                if i > 0 {
                    out.push_str("::");
                }
                write_segment(seg, paths, out)?;
            }
        }
        out.push('>');
        for seg in &segments[q.position..] {
            out.push_str("::");
            write_segment(seg, paths, out)?;
        }
        return Ok(());
    }

    let first = match paths {
        Paths::Full => 0,
        Paths::Short => segments.len() - 1,
    };
    if matches!(paths, Paths::Full) && path.leading_colon.is_some() {
        out.push_str("::");
    }
    for (i, seg) in segments[first..].iter().enumerate() {
        if i > 0 {
            out.push_str("::");
        }
        write_segment(seg, paths, out)?;
    }
    Ok(())
}

fn write_segment(seg: &PathSegment, paths: &Paths, out: &mut String) -> syn::Result<()> {
    out.push_str(&seg.ident.to_string());
    match &seg.arguments {
        PathArguments::None => Ok(()),
        PathArguments::AngleBracketed(args) => write_generic_args(args, paths, out),
        PathArguments::Parenthesized(args) => {
            out.push('(');
            for (i, ty) in args.inputs.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_type(ty, paths, out)?;
            }
            out.push(')');
            if let ReturnType::Type(_, ret) = &args.output {
                out.push_str(" -> ");
                write_type(ret, paths, out)?;
            }
            Ok(())
        }
    }
}

fn write_generic_args(
    args: &AngleBracketedGenericArguments,
    paths: &Paths,
    out: &mut String,
) -> syn::Result<()> {
    out.push('<');
    for (i, arg) in args.args.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        match arg {
            GenericArgument::Lifetime(lt) => out.push_str(&lt.to_string()),
            GenericArgument::Type(ty) => write_type(ty, paths, out)?,
            GenericArgument::Const(expr) => out.push_str(&tokens(expr)),
            GenericArgument::AssocType(assoc) => {
                out.push_str(&assoc.ident.to_string());
                if let Some(generics) = &assoc.generics {
                    write_generic_args(generics, paths, out)?;
                }
                out.push_str(" = ");
                write_type(&assoc.ty, paths, out)?;
            }
            other => out.push_str(&tokens(other)),
        }
    }
    out.push('>');
    Ok(())
}

fn write_bounds(
    bounds: &Punctuated<TypeParamBound, Token![+]>,
    paths: &Paths,
    out: &mut String,
) -> syn::Result<()> {
    for (i, bound) in bounds.iter().enumerate() {
        if i > 0 {
            out.push_str(" + ");
        }
        match bound {
            TypeParamBound::Trait(t) => {
                if matches!(t.modifier, TraitBoundModifier::Maybe(_)) {
                    out.push('?');
                }
                if let Some(lts) = &t.lifetimes {
                    out.push_str("for<");
                    for (j, param) in lts.lifetimes.iter().enumerate() {
                        if j > 0 {
                            out.push_str(", ");
                        }
                        out.push_str(&tokens(param));
                    }
                    out.push_str("> ");
                }
                write_path(None, &t.path, paths, out)?;
            }
            TypeParamBound::Lifetime(lt) => out.push_str(&lt.to_string()),
            other => out.push_str(&tokens(other)),
        }
    }
    Ok(())
}

fn tokens<T: ToTokens>(t: &T) -> String {
    t.to_token_stream().to_string()
}
