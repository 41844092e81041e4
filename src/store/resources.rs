//! Concrete resources managed from the dashboard

use serde_json::json;
use crate::models::{
    Category, CreateCategoryRequest, CreateEventRequest, CreateExhibitorRequest,
    CreateGalleryImageRequest, CreateTeamMemberRequest, CreateVisitorRequest, Event, Exhibitor,
    GalleryImage, TeamMember, Visitor,
};
use crate::services::api::{MultipartBody, RequestBody};
use crate::utils::helpers::is_plausible_email;
use super::resource::{Endpoints, Resource};

/// Field name of the uploaded file for categories and gallery images
pub const IMAGE_FIELD: &str = "image";
/// Field name of the uploaded logo for exhibitors
pub const LOGO_FIELD: &str = "company_logo";

fn require(value: &str, label: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} is required", label))
    } else {
        Ok(())
    }
}

fn require_email(value: &str) -> Result<(), String> {
    require(value, "Email")?;
    if is_plausible_email(value) {
        Ok(())
    } else {
        Err("Email is not valid".to_string())
    }
}

/// Team members (manager and sales staff)
pub struct Team;

impl Resource for Team {
    type Item = TeamMember;
    type Draft = CreateTeamMemberRequest;

    const SINGULAR: &'static str = "team member";
    const PLURAL: &'static str = "team members";

    fn endpoints() -> Endpoints {
        Endpoints::explicit("api/team")
    }

    fn item_id(item: &TeamMember) -> i64 {
        item.id
    }

    fn body(draft: &CreateTeamMemberRequest) -> RequestBody {
        RequestBody::Json(json!({
            "name": draft.name,
            "email": draft.email,
            "role": draft.role.as_str(),
        }))
    }

    fn validate(draft: &CreateTeamMemberRequest) -> Result<(), String> {
        require(&draft.name, "Name")?;
        require_email(&draft.email)
    }
}

/// Product categories; always sent as multipart since the backend only parses forms
pub struct Categories;

impl Resource for Categories {
    type Item = Category;
    type Draft = CreateCategoryRequest;

    const SINGULAR: &'static str = "category";
    const PLURAL: &'static str = "categories";

    fn endpoints() -> Endpoints {
        Endpoints::collection("api/categories")
    }

    fn item_id(item: &Category) -> i64 {
        item.id
    }

    fn body(draft: &CreateCategoryRequest) -> RequestBody {
        RequestBody::Multipart(
            MultipartBody::new()
                .text("name", &draft.name)
                .text("icon", &draft.icon)
                .text("description", &draft.description)
                .asset(IMAGE_FIELD, draft.image.as_ref()),
        )
    }

    fn validate(draft: &CreateCategoryRequest) -> Result<(), String> {
        require(&draft.name, "Name")
    }

    fn asset_url(item: &Category) -> Option<&str> {
        item.image.as_deref()
    }
}

/// Exhibitor registrations
pub struct Exhibitors;

impl Resource for Exhibitors {
    type Item = Exhibitor;
    type Draft = CreateExhibitorRequest;

    const SINGULAR: &'static str = "exhibitor";
    const PLURAL: &'static str = "exhibitors";

    fn endpoints() -> Endpoints {
        Endpoints::collection("api/exhibitor-registrations")
    }

    fn item_id(item: &Exhibitor) -> i64 {
        item.id
    }

    fn body(draft: &CreateExhibitorRequest) -> RequestBody {
        match draft.company_logo.as_ref() {
            Some(logo) => RequestBody::Multipart(
                MultipartBody::new()
                    .text("company_name", &draft.company_name)
                    .text("contact_person", &draft.contact_person)
                    .text("designation", &draft.designation)
                    .text("email", &draft.email)
                    .text("contact_number", &draft.contact_number)
                    .text("product", &draft.product)
                    .text("address", &draft.address)
                    .text("status", draft.status.as_str())
                    .asset(LOGO_FIELD, Some(logo)),
            ),
            None => RequestBody::Json(json!({
                "company_name": draft.company_name,
                "contact_person": draft.contact_person,
                "designation": draft.designation,
                "email": draft.email,
                "contact_number": draft.contact_number,
                "product": draft.product,
                "address": draft.address,
                "status": draft.status.as_str(),
            })),
        }
    }

    fn validate(draft: &CreateExhibitorRequest) -> Result<(), String> {
        require(&draft.company_name, "Company name")?;
        require_email(&draft.email)
    }

    fn asset_url(item: &Exhibitor) -> Option<&str> {
        item.company_logo.as_deref()
    }
}

/// Visitor registrations
pub struct Visitors;

impl Resource for Visitors {
    type Item = Visitor;
    type Draft = CreateVisitorRequest;

    const SINGULAR: &'static str = "visitor";
    const PLURAL: &'static str = "visitors";

    fn endpoints() -> Endpoints {
        Endpoints::collection("api/visitor-registrations")
    }

    fn item_id(item: &Visitor) -> i64 {
        item.id
    }

    fn body(draft: &CreateVisitorRequest) -> RequestBody {
        RequestBody::Json(json!({
            "first_name": draft.first_name,
            "last_name": draft.last_name,
            "company": draft.company,
            "email": draft.email,
            "phone": draft.phone,
            "industry_interest": draft.industry_interest,
        }))
    }

    fn validate(draft: &CreateVisitorRequest) -> Result<(), String> {
        require(&draft.first_name, "First name")?;
        require_email(&draft.email)
    }
}

/// Expo events
pub struct Events;

impl Resource for Events {
    type Item = Event;
    type Draft = CreateEventRequest;

    const SINGULAR: &'static str = "event";
    const PLURAL: &'static str = "events";

    fn endpoints() -> Endpoints {
        Endpoints::collection("api/events")
    }

    fn item_id(item: &Event) -> i64 {
        item.id
    }

    fn body(draft: &CreateEventRequest) -> RequestBody {
        RequestBody::Json(json!({
            "title": draft.title,
            "location": draft.location,
            "start_date": draft.start_date,
            "end_date": draft.end_date,
            "time": draft.time,
            "exhibitors": draft.exhibitors,
            "buyers": draft.buyers,
            "countries": draft.countries,
            "sectors": draft.sectors,
            "description": draft.description,
            "is_published": draft.is_published,
        }))
    }

    fn validate(draft: &CreateEventRequest) -> Result<(), String> {
        require(&draft.title, "Title")?;
        match (draft.start_date, draft.end_date) {
            (Some(start), Some(end)) if end < start => {
                Err("End date must not be before start date".to_string())
            }
            (Some(_), Some(_)) => Ok(()),
            _ => Err("Start and end dates are required".to_string()),
        }
    }
}

/// Gallery images; the image file is mandatory
pub struct Gallery;

impl Resource for Gallery {
    type Item = GalleryImage;
    type Draft = CreateGalleryImageRequest;

    const SINGULAR: &'static str = "gallery image";
    const PLURAL: &'static str = "gallery images";

    fn endpoints() -> Endpoints {
        Endpoints::collection("api/gallery")
    }

    fn item_id(item: &GalleryImage) -> i64 {
        item.id
    }

    fn body(draft: &CreateGalleryImageRequest) -> RequestBody {
        RequestBody::Multipart(
            MultipartBody::new()
                .text("title", &draft.title)
                .text("description", &draft.description)
                .text("type", draft.kind.as_str())
                .text("display_order", draft.display_order)
                .asset(IMAGE_FIELD, draft.image.as_ref()),
        )
    }

    fn validate(draft: &CreateGalleryImageRequest) -> Result<(), String> {
        if draft.image.is_none() {
            return Err("Image is required".to_string());
        }
        Ok(())
    }

    fn asset_url(item: &GalleryImage) -> Option<&str> {
        Some(item.image.as_str())
    }
}
