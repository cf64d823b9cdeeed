use serde::{Deserialize, Deserializer, Serialize};

/// A product listing as returned by the backend.
///
/// The institution field is `collgename` on the wire; some endpoints spell
/// it `collegename`, which is accepted on read.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct Listing {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub price: String,
    #[serde(rename = "rollno", default)]
    pub roll_number: String,
    #[serde(rename = "collgename", alias = "collegename", default)]
    pub college_name: String,
    #[serde(rename = "dept", default)]
    pub department: String,
    #[serde(rename = "phoneno", default)]
    pub phone_number: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "googledrivelink", default)]
    pub image_link_url: String,
}

/// Editable listing fields, sent as the body of create and update calls.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ListingDraft {
    pub name: String,
    pub price: String,
    #[serde(rename = "rollno")]
    pub roll_number: String,
    #[serde(rename = "collgename")]
    pub college_name: String,
    #[serde(rename = "googledrivelink")]
    pub image_link_url: String,
    pub description: String,
    #[serde(rename = "dept")]
    pub department: String,
    #[serde(rename = "phoneno")]
    pub phone_number: String,
}

impl From<&Listing> for ListingDraft {
    fn from(listing: &Listing) -> Self {
        Self {
            name: listing.name.clone(),
            price: listing.price.clone(),
            roll_number: listing.roll_number.clone(),
            college_name: listing.college_name.clone(),
            image_link_url: listing.image_link_url.clone(),
            description: listing.description.clone(),
            department: listing.department.clone(),
            phone_number: listing.phone_number.clone(),
        }
    }
}

/// Form fields of a listing, keyed by their wire name.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ListingField {
    Name,
    Price,
    RollNumber,
    CollegeName,
    ImageLink,
    Description,
    Department,
    PhoneNumber,
}

impl ListingField {
    pub const ALL: [ListingField; 8] = [
        ListingField::Name,
        ListingField::Price,
        ListingField::RollNumber,
        ListingField::CollegeName,
        ListingField::ImageLink,
        ListingField::Description,
        ListingField::Department,
        ListingField::PhoneNumber,
    ];

    pub fn wire_name(self) -> &'static str {
        match self {
            ListingField::Name => "name",
            ListingField::Price => "price",
            ListingField::RollNumber => "rollno",
            ListingField::CollegeName => "collgename",
            ListingField::ImageLink => "googledrivelink",
            ListingField::Description => "description",
            ListingField::Department => "dept",
            ListingField::PhoneNumber => "phoneno",
        }
    }

    pub fn from_wire_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.wire_name() == name)
    }

    pub fn label(self) -> &'static str {
        match self {
            ListingField::Name => "Product Name",
            ListingField::Price => "Price",
            ListingField::RollNumber => "Roll Number",
            ListingField::CollegeName => "College Name",
            ListingField::ImageLink => "Drive Link",
            ListingField::Description => "Description",
            ListingField::Department => "Department",
            ListingField::PhoneNumber => "Phone Number",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ListingField::Name => "Enter product name",
            ListingField::Price => "Enter price",
            ListingField::RollNumber => "Enter your roll number",
            ListingField::CollegeName => "Enter your college name",
            ListingField::ImageLink => "Enter drive link of the Product images",
            ListingField::Description => "Enter product description",
            ListingField::Department => "Enter your department",
            ListingField::PhoneNumber => "Enter your phone number",
        }
    }

    /// HTML input type used when rendering the field.
    pub fn input_type(self) -> &'static str {
        match self {
            ListingField::Price => "number",
            ListingField::ImageLink => "url",
            ListingField::PhoneNumber => "tel",
            _ => "text",
        }
    }
}

impl ListingDraft {
    pub fn get(&self, field: ListingField) -> &str {
        match field {
            ListingField::Name => &self.name,
            ListingField::Price => &self.price,
            ListingField::RollNumber => &self.roll_number,
            ListingField::CollegeName => &self.college_name,
            ListingField::ImageLink => &self.image_link_url,
            ListingField::Description => &self.description,
            ListingField::Department => &self.department,
            ListingField::PhoneNumber => &self.phone_number,
        }
    }

    pub fn set(&mut self, field: ListingField, value: String) {
        let slot = match field {
            ListingField::Name => &mut self.name,
            ListingField::Price => &mut self.price,
            ListingField::RollNumber => &mut self.roll_number,
            ListingField::CollegeName => &mut self.college_name,
            ListingField::ImageLink => &mut self.image_link_url,
            ListingField::Description => &mut self.description,
            ListingField::Department => &mut self.department,
            ListingField::PhoneNumber => &mut self.phone_number,
        };
        *slot = value;
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
        Missing(()),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
        Raw::Missing(()) => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_reads_either_college_spelling_and_numeric_price() {
        let listing: Listing = serde_json::from_str(
            r#"{"_id":"1","name":"Calculator","price":450,"collegename":"GIT","dept":"ECE"}"#,
        )
        .unwrap();
        assert_eq!(listing.college_name, "GIT");
        assert_eq!(listing.price, "450");
        assert_eq!(listing.department, "ECE");
        assert!(listing.email.is_empty());

        let listing: Listing =
            serde_json::from_str(r#"{"_id":"2","price":"99.5","collgename":"NIT"}"#).unwrap();
        assert_eq!(listing.college_name, "NIT");
        assert_eq!(listing.price, "99.5");
    }

    #[test]
    fn null_price_reads_as_empty() {
        let listing: Listing = serde_json::from_str(r#"{"_id":"3","price":null}"#).unwrap();
        assert!(listing.price.is_empty());
    }

    #[test]
    fn draft_serializes_with_wire_names() {
        let mut draft = ListingDraft::default();
        draft.set(ListingField::CollegeName, "GIT".to_string());
        draft.set(ListingField::PhoneNumber, "98450".to_string());
        let body = serde_json::to_value(&draft).unwrap();
        assert_eq!(body["collgename"], "GIT");
        assert_eq!(body["phoneno"], "98450");
        assert!(body.get("college_name").is_none());
    }

    #[test]
    fn prefilled_draft_resubmits_the_same_record() {
        let listing = Listing {
            id: "42".to_string(),
            name: "Lab coat".to_string(),
            price: "200".to_string(),
            roll_number: "21CS042".to_string(),
            college_name: "GIT".to_string(),
            department: "CSE".to_string(),
            phone_number: "9000000000".to_string(),
            email: "seller@example.com".to_string(),
            description: "Worn twice".to_string(),
            image_link_url: "https://drive.example/x".to_string(),
        };
        let draft = ListingDraft::from(&listing);
        let echoed: Listing = {
            let mut body = serde_json::to_value(&draft).unwrap();
            body["_id"] = serde_json::json!(listing.id);
            body["email"] = serde_json::json!(listing.email);
            serde_json::from_value(body).unwrap()
        };
        assert_eq!(echoed, listing);
    }

    #[test]
    fn fields_resolve_from_wire_names() {
        for field in ListingField::ALL {
            assert_eq!(ListingField::from_wire_name(field.wire_name()), Some(field));
        }
        assert_eq!(ListingField::from_wire_name("college_name"), None);
    }
}
