//! State variables
//!
//! A state variable is a named symbolic field tagged with the mesh regions
//! it is defined over. Submodels require exactly one region; the tag is a
//! *list* nonetheless, because upstream model wiring can get this wrong and
//! the violation has to be representable in order to be reported.

use std::fmt;

use crate::physics::domain::Region;

/// Named symbolic field quantity
///
/// # Example
///
/// ```rust
/// use cell_rs::symbolic::Variable;
/// use cell_rs::physics::Region;
///
/// let c_n = Variable::new("c_n", Region::NegativeParticle);
/// assert_eq!(c_n.name(), "c_n");
/// assert_eq!(c_n.regions(), &[Region::NegativeParticle]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variable {
    /// Symbol name (e.g. "c_n")
    name: String,

    /// Regions the field is defined over
    regions: Vec<Region>,
}

impl Variable {
    /// Create a variable on a single region
    pub fn new(name: &str, region: Region) -> Self {
        Self {
            name: name.to_string(),
            regions: vec![region],
        }
    }

    /// Create a variable with an arbitrary region list
    ///
    /// Mainly useful to represent (and test against) miswired inputs; the
    /// particle submodels reject anything but a single particle region.
    pub fn with_regions(name: &str, regions: Vec<Region>) -> Self {
        Self {
            name: name.to_string(),
            regions,
        }
    }

    /// Symbol name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Regions the field is defined over
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
