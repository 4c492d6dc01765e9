use syn::{Lifetime, Type, visit_mut::VisitMut};

/// True when the last path segment of `ty` is `ident`, e.g. `Option`.
///
/// Purely syntactic; aliases are not seen through.
pub fn is_path_ident(ty: &Type, ident: &str) -> bool {
    let Type::Path(path) = ty else {
        return false;
    };

    path.path
        .segments
        .last()
        .is_some_and(|segment| segment.ident == ident)
}

/// Replace every lifetime in `ty` with `'static`.
pub fn erase_lifetimes(ty: &Type) -> Type {
    let mut ty = ty.clone();
    EraseLifetimes.visit_type_mut(&mut ty);

    ty
}

struct EraseLifetimes;

impl VisitMut for EraseLifetimes {
    fn visit_lifetime_mut(&mut self, lifetime: &mut Lifetime) {
        *lifetime = Lifetime::new("'static", lifetime.span());
    }
}
