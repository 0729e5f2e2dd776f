//! Collision-free names: `img.jpg`, `img_1.jpg`, `img_2.jpg`, ...

/// Returns `candidate` if `exists` says it is free, otherwise the first
/// `<stem>_<n><ext>` (n = 1, 2, ...) that is free.
pub fn unique_filename<F>(candidate: &str, mut exists: F) -> String
where
    F: FnMut(&str) -> bool,
{
    if !exists(candidate) {
        return candidate.to_string();
    }
    let (stem, ext) = super::split_ext(candidate);
    let mut counter: u64 = 1;
    loop {
        let name = format!("{}_{}{}", stem, counter, ext);
        if !exists(&name) {
            return name;
        }
        counter += 1;
    }
}
