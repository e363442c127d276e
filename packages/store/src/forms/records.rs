//! Forms for the flat record screens (dialogs and single-page forms).

use api::models::{
    BedRoom, BedRoomPayload, Document, DocumentPayload, Donation, DonationPayload, Event,
    EventPayload, EventStatus, Inventory, InventoryPayload, TypePayload, TypeRef,
};
use validator::Validate;

use super::{check, format_date, optional, parse_number, require_date, FieldErrors};

fn type_id(reference: &Option<TypeRef>) -> String {
    reference.as_ref().map(|t| t.id.clone()).unwrap_or_default()
}

#[derive(Clone, Debug, Default, PartialEq, Validate)]
pub struct BedRoomForm {
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,
    pub capacity: String,
    pub bed_room_type_id: String,
    pub note: String,
}

impl BedRoomForm {
    pub fn from_item(room: &BedRoom) -> Self {
        Self {
            name: room.name.clone(),
            capacity: room.capacity.to_string(),
            bed_room_type_id: type_id(&room.bed_room_type),
            note: room.note.clone().unwrap_or_default(),
        }
    }

    pub fn to_payload(&self) -> Result<BedRoomPayload, FieldErrors> {
        let mut errors = check(self);
        let capacity = parse_number::<u32>(&mut errors, "capacity", &self.capacity).unwrap_or(0);
        if capacity == 0 {
            errors.insert("capacity", "Capacity must be at least 1");
        }
        errors.into_result(BedRoomPayload {
            name: self.name.trim().to_string(),
            capacity,
            bed_room_type_id: optional(&self.bed_room_type_id),
            note: optional(&self.note),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Validate)]
pub struct DonationForm {
    #[validate(length(min = 1, max = 150, message = "Donor name is required"))]
    pub donor_name: String,
    pub donor_phone: String,
    pub amount: String,
    pub date: String,
    #[validate(length(min = 1, message = "Choose a donation type"))]
    pub donation_type_id: String,
    pub description: String,
}

impl DonationForm {
    pub fn from_item(donation: &Donation) -> Self {
        Self {
            donor_name: donation.donor_name.clone(),
            donor_phone: donation.donor_phone.clone().unwrap_or_default(),
            amount: donation.amount.to_string(),
            date: format_date(donation.date),
            donation_type_id: type_id(&donation.donation_type),
            description: donation.description.clone().unwrap_or_default(),
        }
    }

    pub fn to_payload(&self) -> Result<DonationPayload, FieldErrors> {
        let mut errors = check(self);
        let amount = parse_number::<i64>(&mut errors, "amount", &self.amount).unwrap_or(0);
        if amount <= 0 {
            errors.insert("amount", "Amount must be greater than zero");
        }
        let date = require_date(&mut errors, "date", &self.date);
        match date {
            Some(date) => errors.into_result(DonationPayload {
                donor_name: self.donor_name.trim().to_string(),
                donor_phone: optional(&self.donor_phone),
                amount,
                date,
                donation_type_id: self.donation_type_id.clone(),
                description: optional(&self.description),
            }),
            None => Err(errors),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Validate)]
pub struct EventForm {
    #[validate(length(min = 1, max = 150, message = "Event name is required"))]
    pub name: String,
    pub description: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
    #[validate(length(min = 1, message = "Choose an event type"))]
    pub event_type_id: String,
}

impl Default for EventForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            location: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            status: EventStatus::Planned.as_str().to_string(),
            event_type_id: String::new(),
        }
    }
}

impl EventForm {
    pub fn from_item(event: &Event) -> Self {
        Self {
            name: event.name.clone(),
            description: event.description.clone().unwrap_or_default(),
            location: event.location.clone().unwrap_or_default(),
            start_date: format_date(event.start_date),
            end_date: format_date(event.end_date),
            status: event.status.as_str().to_string(),
            event_type_id: type_id(&event.event_type),
        }
    }

    pub fn to_payload(&self) -> Result<EventPayload, FieldErrors> {
        let mut errors = check(self);
        let status = EventStatus::parse(&self.status).unwrap_or_else(|| {
            errors.insert("status", "Choose a status");
            EventStatus::default()
        });
        let start = require_date(&mut errors, "start_date", &self.start_date);
        let end = require_date(&mut errors, "end_date", &self.end_date);

        let (Some(start_date), Some(end_date)) = (start, end) else {
            return Err(errors);
        };
        if end_date < start_date {
            errors.insert("end_date", "End date cannot be before the start date");
        }
        errors.into_result(EventPayload {
            name: self.name.trim().to_string(),
            description: optional(&self.description),
            location: optional(&self.location),
            start_date,
            end_date,
            status,
            event_type_id: self.event_type_id.clone(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Validate)]
pub struct InventoryForm {
    #[validate(length(min = 1, max = 150, message = "Item name is required"))]
    pub name: String,
    pub quantity: String,
    pub unit: String,
    #[validate(length(min = 1, message = "Choose an inventory type"))]
    pub inventory_type_id: String,
    pub description: String,
}

impl InventoryForm {
    pub fn from_item(item: &Inventory) -> Self {
        Self {
            name: item.name.clone(),
            quantity: item.quantity.to_string(),
            unit: item.unit.clone().unwrap_or_default(),
            inventory_type_id: type_id(&item.inventory_type),
            description: item.description.clone().unwrap_or_default(),
        }
    }

    pub fn to_payload(&self) -> Result<InventoryPayload, FieldErrors> {
        let mut errors = check(self);
        let quantity = parse_number::<u32>(&mut errors, "quantity", &self.quantity).unwrap_or(0);
        errors.into_result(InventoryPayload {
            name: self.name.trim().to_string(),
            quantity,
            unit: optional(&self.unit),
            inventory_type_id: self.inventory_type_id.clone(),
            description: optional(&self.description),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Validate)]
pub struct DocumentTypeForm {
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,
}

impl DocumentTypeForm {
    pub fn from_item(item: &TypeRef) -> Self {
        Self {
            name: item.name.clone(),
        }
    }

    pub fn to_payload(&self) -> Result<TypePayload, FieldErrors> {
        check(self).into_result(TypePayload {
            name: self.name.trim().to_string(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Validate)]
pub struct DocumentForm {
    #[validate(length(min = 1, max = 150, message = "Document name is required"))]
    pub name: String,
    #[validate(url(message = "Enter a valid link"))]
    pub url: String,
    #[validate(length(min = 1, message = "Choose a document type"))]
    pub document_type_id: String,
    pub user_id: String,
}

impl DocumentForm {
    pub fn for_user(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            ..Self::default()
        }
    }

    pub fn from_item(document: &Document) -> Self {
        Self {
            name: document.name.clone(),
            url: document.url.clone().unwrap_or_default(),
            document_type_id: type_id(&document.document_type),
            user_id: document.user_id.clone().unwrap_or_default(),
        }
    }

    pub fn to_payload(&self) -> Result<DocumentPayload, FieldErrors> {
        check(self).into_result(DocumentPayload {
            name: self.name.trim().to_string(),
            url: self.url.trim().to_string(),
            document_type_id: self.document_type_id.clone(),
            user_id: optional(&self.user_id),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_end_before_start() {
        let form = EventForm {
            name: "Buka bersama".to_string(),
            start_date: "2024-04-10".to_string(),
            end_date: "2024-04-09".to_string(),
            event_type_id: "t1".to_string(),
            ..EventForm::default()
        };
        let errors = form.to_payload().unwrap_err();
        assert_eq!(errors.get("end_date"), Some("End date cannot be before the start date"));

        let same_day = EventForm {
            end_date: "2024-04-10".to_string(),
            ..form
        };
        let payload = same_day.to_payload().unwrap();
        assert_eq!(payload.status, EventStatus::Planned);
    }

    #[test]
    fn test_event_requires_dates() {
        let errors = EventForm::default().to_payload().unwrap_err();
        assert_eq!(errors.get("start_date"), Some("Date is required"));
        assert_eq!(errors.get("end_date"), Some("Date is required"));
        assert_eq!(errors.get("name"), Some("Event name is required"));
    }

    #[test]
    fn test_donation_amount_parsing() {
        let form = DonationForm {
            donor_name: "Hamba Allah".to_string(),
            amount: "1.250.000".to_string(),
            date: "2024-03-01".to_string(),
            donation_type_id: "cash".to_string(),
            ..DonationForm::default()
        };
        assert_eq!(form.to_payload().unwrap().amount, 1_250_000);

        let zero = DonationForm {
            amount: "0".to_string(),
            ..form
        };
        assert_eq!(
            zero.to_payload().unwrap_err().get("amount"),
            Some("Amount must be greater than zero")
        );
    }

    #[test]
    fn test_bedroom_capacity() {
        let form = BedRoomForm {
            name: "Melati".to_string(),
            capacity: "0".to_string(),
            ..BedRoomForm::default()
        };
        assert!(form.to_payload().unwrap_err().get("capacity").is_some());

        let ok = BedRoomForm {
            capacity: "6".to_string(),
            ..form
        };
        let payload = ok.to_payload().unwrap();
        assert_eq!(payload.capacity, 6);
        assert_eq!(payload.bed_room_type_id, None);
    }

    #[test]
    fn test_inventory_and_document_type() {
        let form = InventoryForm {
            name: "Beras".to_string(),
            quantity: "abc".to_string(),
            ..InventoryForm::default()
        };
        let errors = form.to_payload().unwrap_err();
        assert_eq!(errors.get("quantity"), Some("Enter a whole number"));
        assert_eq!(errors.get("inventory_type_id"), Some("Choose an inventory type"));

        assert!(DocumentTypeForm::default().to_payload().is_err());
        let name = DocumentTypeForm {
            name: " Akta ".to_string(),
        };
        assert_eq!(name.to_payload().unwrap().name, "Akta");
    }

    #[test]
    fn test_document_link_must_be_url() {
        let mut form = DocumentForm::for_user("u1");
        form.name = "Kartu Keluarga".to_string();
        form.document_type_id = "kk".to_string();
        form.url = "not a link".to_string();
        assert_eq!(form.to_payload().unwrap_err().get("url"), Some("Enter a valid link"));

        form.url = "https://files.panti.id/kk.pdf".to_string();
        assert_eq!(form.to_payload().unwrap().user_id.as_deref(), Some("u1"));
    }
}
