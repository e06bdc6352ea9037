use crate::{
    database::MongoDB,
    models::{
        AboutContent, AboutUpsertRequest, HeroContent, HeroUpsertRequest, ServiceCard,
        ServiceCardRequest, Slide, SlideRequest, Testimonial, TestimonialRequest,
    },
    utils::error::AppError,
};
use futures::stream::StreamExt;
use mongodb::bson::{doc, oid::ObjectId};

// ==================== SINGLETONS (hero, about) ====================

pub async fn get_hero(db: &MongoDB) -> Result<HeroContent, AppError> {
    db.collection::<HeroContent>("content_hero")
        .find_one(doc! {})
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?
        .ok_or_else(|| AppError::NotFound("Hero content not set".to_string()))
}

pub async fn upsert_hero(db: &MongoDB, request: &HeroUpsertRequest) -> Result<HeroContent, AppError> {
    let collection = db.collection::<HeroContent>("content_hero");
    let now = chrono::Utc::now().timestamp();

    let update = doc! { "$set": {
        "title": &request.title,
        "subtitle": request.subtitle.as_deref(),
        "image_url": request.image_url.as_deref(),
        "cta_label": request.cta_label.as_deref(),
        "cta_url": request.cta_url.as_deref(),
        "updated_at": now,
    }};

    collection
        .update_one(doc! {}, update)
        .upsert(true)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    get_hero(db).await
}

pub async fn get_about(db: &MongoDB) -> Result<AboutContent, AppError> {
    db.collection::<AboutContent>("content_about")
        .find_one(doc! {})
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?
        .ok_or_else(|| AppError::NotFound("About content not set".to_string()))
}

pub async fn upsert_about(
    db: &MongoDB,
    request: &AboutUpsertRequest,
) -> Result<AboutContent, AppError> {
    let collection = db.collection::<AboutContent>("content_about");
    let now = chrono::Utc::now().timestamp();

    let mission = mongodb::bson::to_bson(&request.mission)
        .map_err(|e| AppError::InvalidRequest(format!("Bad mission items: {}", e)))?;

    let update = doc! { "$set": {
        "heading": &request.heading,
        "body": &request.body,
        "image_url": request.image_url.as_deref(),
        "mission": mission,
        "updated_at": now,
    }};

    collection
        .update_one(doc! {}, update)
        .upsert(true)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    get_about(db).await
}

// ==================== LISTS (slides, service cards, testimonials) ====================

pub async fn list_slides(db: &MongoDB) -> Result<Vec<Slide>, AppError> {
    let mut cursor = db
        .collection::<Slide>("content_slides")
        .find(doc! {})
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    let mut slides = Vec::new();
    while let Some(result) = cursor.next().await {
        match result {
            Ok(slide) => slides.push(slide),
            Err(e) => log::error!("❌ Skipping unreadable slide: {}", e),
        }
    }

    slides.sort_by_key(|s| s.position);

    Ok(slides)
}

pub async fn create_slide(db: &MongoDB, request: &SlideRequest) -> Result<Slide, AppError> {
    let collection = db.collection::<Slide>("content_slides");

    let mut slide = Slide {
        id: None,
        title: request.title.clone(),
        caption: request.caption.clone(),
        image_url: request.image_url.clone(),
        position: request.position.unwrap_or(0),
        created_at: chrono::Utc::now().timestamp(),
    };

    let result = collection
        .insert_one(&slide)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;
    slide.id = result.inserted_id.as_object_id();

    Ok(slide)
}

pub async fn update_slide(db: &MongoDB, id: &str, request: &SlideRequest) -> Result<Slide, AppError> {
    let object_id = parse_id(id, "slide")?;
    let collection = db.collection::<Slide>("content_slides");

    let update = doc! { "$set": {
        "title": &request.title,
        "caption": request.caption.as_deref(),
        "image_url": &request.image_url,
        "position": request.position.unwrap_or(0),
    }};

    let result = collection
        .update_one(doc! { "_id": object_id }, update)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    if result.matched_count == 0 {
        return Err(AppError::NotFound("Slide not found".to_string()));
    }

    collection
        .find_one(doc! { "_id": object_id })
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?
        .ok_or_else(|| AppError::NotFound("Slide not found".to_string()))
}

pub async fn delete_slide(db: &MongoDB, id: &str) -> Result<(), AppError> {
    delete_by_id::<Slide>(db, "content_slides", id, "slide").await
}

pub async fn list_service_cards(db: &MongoDB) -> Result<Vec<ServiceCard>, AppError> {
    let mut cursor = db
        .collection::<ServiceCard>("content_service_cards")
        .find(doc! {})
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    let mut cards = Vec::new();
    while let Some(result) = cursor.next().await {
        match result {
            Ok(card) => cards.push(card),
            Err(e) => log::error!("❌ Skipping unreadable service card: {}", e),
        }
    }

    cards.sort_by_key(|c| c.created_at);

    Ok(cards)
}

pub async fn create_service_card(
    db: &MongoDB,
    request: &ServiceCardRequest,
) -> Result<ServiceCard, AppError> {
    let collection = db.collection::<ServiceCard>("content_service_cards");

    let mut card = ServiceCard {
        id: None,
        title: request.title.clone(),
        description: request.description.clone(),
        icon_url: request.icon_url.clone(),
        features: request.features.clone(),
        created_at: chrono::Utc::now().timestamp(),
    };

    let result = collection
        .insert_one(&card)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;
    card.id = result.inserted_id.as_object_id();

    Ok(card)
}

pub async fn update_service_card(
    db: &MongoDB,
    id: &str,
    request: &ServiceCardRequest,
) -> Result<ServiceCard, AppError> {
    let object_id = parse_id(id, "service card")?;
    let collection = db.collection::<ServiceCard>("content_service_cards");

    let features = mongodb::bson::to_bson(&request.features)
        .map_err(|e| AppError::InvalidRequest(format!("Bad features: {}", e)))?;

    let update = doc! { "$set": {
        "title": &request.title,
        "description": &request.description,
        "icon_url": request.icon_url.as_deref(),
        "features": features,
    }};

    let result = collection
        .update_one(doc! { "_id": object_id }, update)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    if result.matched_count == 0 {
        return Err(AppError::NotFound("Service card not found".to_string()));
    }

    collection
        .find_one(doc! { "_id": object_id })
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?
        .ok_or_else(|| AppError::NotFound("Service card not found".to_string()))
}

pub async fn delete_service_card(db: &MongoDB, id: &str) -> Result<(), AppError> {
    delete_by_id::<ServiceCard>(db, "content_service_cards", id, "service card").await
}

pub async fn list_testimonials(db: &MongoDB) -> Result<Vec<Testimonial>, AppError> {
    let mut cursor = db
        .collection::<Testimonial>("content_testimonials")
        .find(doc! {})
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    let mut testimonials = Vec::new();
    while let Some(result) = cursor.next().await {
        match result {
            Ok(t) => testimonials.push(t),
            Err(e) => log::error!("❌ Skipping unreadable testimonial: {}", e),
        }
    }

    testimonials.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    Ok(testimonials)
}

pub async fn create_testimonial(
    db: &MongoDB,
    request: &TestimonialRequest,
) -> Result<Testimonial, AppError> {
    let collection = db.collection::<Testimonial>("content_testimonials");

    let mut testimonial = Testimonial {
        id: None,
        author: request.author.clone(),
        role: request.role.clone(),
        quote: request.quote.clone(),
        avatar_url: request.avatar_url.clone(),
        created_at: chrono::Utc::now().timestamp(),
    };

    let result = collection
        .insert_one(&testimonial)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;
    testimonial.id = result.inserted_id.as_object_id();

    Ok(testimonial)
}

pub async fn update_testimonial(
    db: &MongoDB,
    id: &str,
    request: &TestimonialRequest,
) -> Result<Testimonial, AppError> {
    let object_id = parse_id(id, "testimonial")?;
    let collection = db.collection::<Testimonial>("content_testimonials");

    let update = doc! { "$set": {
        "author": &request.author,
        "role": request.role.as_deref(),
        "quote": &request.quote,
        "avatar_url": request.avatar_url.as_deref(),
    }};

    let result = collection
        .update_one(doc! { "_id": object_id }, update)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    if result.matched_count == 0 {
        return Err(AppError::NotFound("Testimonial not found".to_string()));
    }

    collection
        .find_one(doc! { "_id": object_id })
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?
        .ok_or_else(|| AppError::NotFound("Testimonial not found".to_string()))
}

pub async fn delete_testimonial(db: &MongoDB, id: &str) -> Result<(), AppError> {
    delete_by_id::<Testimonial>(db, "content_testimonials", id, "testimonial").await
}

async fn delete_by_id<T: Send + Sync>(
    db: &MongoDB,
    collection_name: &str,
    id: &str,
    kind: &str,
) -> Result<(), AppError> {
    let object_id = parse_id(id, kind)?;

    let result = db
        .collection::<T>(collection_name)
        .delete_one(doc! { "_id": object_id })
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    if result.deleted_count == 0 {
        return Err(AppError::NotFound(format!("{} not found", capitalize(kind))));
    }

    Ok(())
}

fn parse_id(id: &str, kind: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(|_| AppError::InvalidRequest(format!("Invalid {} ID", kind)))
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
