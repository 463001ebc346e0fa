// src/domain/gallery.rs
use thiserror::Error;

/// Number of stock images appended after the listing's own photo.
pub const DERIVED_IMAGES: usize = 4;

/// Interior shots shared by every listing's gallery.
pub const STOCK_INTERIORS: [&str; 10] = [
    "https://images.unsplash.com/photo-1616486338812-3dadae4b4f9d?q=80&w=1200&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1616137466211-f939a420be84?q=80&w=1200&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1618221195710-dd6b41faaea6?q=80&w=1200&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1586023492125-27b2c045efd7?q=80&w=1200&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1617806118233-18e1de247200?q=80&w=1200&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1595558171673-e79482169081?q=80&w=1200&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1600585152220-90363fe7e115?q=80&w=1200&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1560185007-cde436f6a4d0?q=80&w=1200&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1505691938895-1758d7feb511?q=80&w=1200&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1556228453-efd6c1ff04f6?q=80&w=1200&auto=format&fit=crop",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GalleryError {
    #[error("stock image pool is empty")]
    EmptyPool,
}

/// `h = c + ((h << 5) - h)` over UTF-16 code units, seeded at 0.
///
/// The shift narrows `h` to 32 bits first (so this is `h * 31 + c` modulo
/// 2^32), but the sum itself is not narrowed. Keeping it in an i64 gives the
/// same value browsers compute for the same id, so galleries stay stable
/// across implementations.
pub fn id_hash(id: &str) -> i64 {
    id.encode_utf16().fold(0i64, |h, unit| {
        let shifted = (h as i32).wrapping_shl(5) as i64;
        unit as i64 + shifted - h
    })
}

/// Primary image first, then four consecutive pool images starting at
/// `|hash(id)| mod pool.len()`, wrapping around.
pub fn derive_gallery<S: AsRef<str>>(
    listing_id: &str,
    primary: &str,
    pool: &[S],
) -> Result<Vec<String>, GalleryError> {
    if pool.is_empty() {
        return Err(GalleryError::EmptyPool);
    }

    let len = pool.len();
    let base = (id_hash(listing_id).unsigned_abs() % len as u64) as usize;

    let mut images = Vec::with_capacity(DERIVED_IMAGES + 1);
    images.push(primary.to_string());
    images.extend((0..DERIVED_IMAGES).map(|i| pool[(base + i) % len].as_ref().to_string()));
    Ok(images)
}

/// Gallery built from [`STOCK_INTERIORS`].
pub fn listing_gallery(listing_id: &str, primary: &str) -> Vec<String> {
    derive_gallery(listing_id, primary, &STOCK_INTERIORS)
        .unwrap_or_else(|_| vec![primary.to_string()])
}
