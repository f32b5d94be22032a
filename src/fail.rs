#[cold]
#[inline(never)]
pub(crate) fn add_before_begin<T>() -> T {
    panic!("Generator field added before `begin`");
}

#[cold]
#[inline(never)]
pub(crate) fn begin_after_begin<T>() -> T {
    panic!("`begin` called twice on the same generator");
}

#[cold]
#[inline(never)]
pub(crate) fn unbalanced_build<T>(open: usize) -> T {
    panic!(
        "`build` called with {} open elements, expected only the record root",
        open
    );
}
