mod area;
mod brand;
mod compliance;

pub use area::StoreArea;
pub use brand::ProductBrand;
pub use compliance::{AreaCompliance, BrandCompliance};
