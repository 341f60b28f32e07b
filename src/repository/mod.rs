mod area;
mod brand;
mod compliance;

pub use area::AreaRepository;
pub use brand::BrandRepository;
pub use compliance::ComplianceRepository;
