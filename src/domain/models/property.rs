use serde::{Deserialize, Serialize};

/// A single Mars property listing as returned by the `/realestate` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarsProperty {
    /// Unique listing identifier.
    pub id: String,

    /// URL of the listing photo. The wire field is `img_src`.
    #[serde(rename = "img_src")]
    pub img_src_url: String,

    /// Listing kind: `"rent"` or `"buy"`. The wire field is `type`.
    #[serde(rename = "type")]
    pub property_type: String,

    /// Price in dollars; per month for rentals.
    pub price: f64,
}

impl MarsProperty {
    /// Whether this listing is a rental rather than a sale.
    pub fn is_rental(&self) -> bool {
        self.property_type == "rent"
    }

    /// Human-readable price, with the per-month suffix for rentals.
    pub fn display_price(&self) -> String {
        if self.is_rental() {
            format!("${:.0}/month", self.price)
        } else {
            format!("${:.0}", self.price)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_format() {
        let json = r#"{
            "price": 450000,
            "id": "424906",
            "type": "rent",
            "img_src": "http://mars.jpl.nasa.gov/msl-raw-images/msss/01000/mcam/1000ML0044631300305227E03_DXXX.jpg"
        }"#;

        let property: MarsProperty = serde_json::from_str(json).unwrap();
        assert_eq!(property.id, "424906");
        assert_eq!(property.property_type, "rent");
        assert!((property.price - 450_000.0).abs() < f64::EPSILON);
        assert!(property.img_src_url.starts_with("http://mars.jpl.nasa.gov"));
    }

    #[test]
    fn rental_price_is_monthly() {
        let rental = MarsProperty {
            id: "1".to_string(),
            img_src_url: String::new(),
            property_type: "rent".to_string(),
            price: 1_500.0,
        };
        assert!(rental.is_rental());
        assert_eq!(rental.display_price(), "$1500/month");
    }

    #[test]
    fn sale_price_has_no_suffix() {
        let sale = MarsProperty {
            id: "2".to_string(),
            img_src_url: String::new(),
            property_type: "buy".to_string(),
            price: 450_000.0,
        };
        assert!(!sale.is_rental());
        assert_eq!(sale.display_price(), "$450000");
    }
}
