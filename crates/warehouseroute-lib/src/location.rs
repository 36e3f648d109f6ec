use std::fmt;

/// A named place in the warehouse.
///
/// Locations identify where goods live independently of the traversal graph;
/// each graph node carries exactly one. Equality is structural and
/// variant-sensitive, so an area and a deep stacking lane in the same
/// material handling area never compare equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// A named floor area, e.g. an inbound buffer where goods wait after
    /// being unloaded from a truck.
    Area { mha: String },

    /// A slot in a storage rack, addressed by rack id and horizontal and
    /// vertical coordinates within its material handling area.
    Rack {
        mha: String,
        rack: String,
        horcoor: String,
        vercoor: String,
    },

    /// A lane in a deep stacking area, where goods queue up and only the
    /// last unit can be accessed.
    DeepStacking {
        mha: String,
        horcoor: String,
        vercoor: String,
    },
}

impl Location {
    /// Material handling area this location belongs to.
    pub fn mha(&self) -> &str {
        match self {
            Location::Area { mha }
            | Location::Rack { mha, .. }
            | Location::DeepStacking { mha, .. } => mha,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Area { mha } => write!(f, "MHA {}", mha),
            Location::Rack {
                mha,
                rack,
                horcoor,
                vercoor,
            } => write!(f, "MHA {} rack {} x {} y {}", mha, rack, horcoor, vercoor),
            Location::DeepStacking {
                mha,
                horcoor,
                vercoor,
            } => write!(f, "MHA {} x {} y {}", mha, horcoor, vercoor),
        }
    }
}
