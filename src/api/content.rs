use actix_web::{delete, get, post, put, web, HttpResponse, Responder};

use crate::database::MongoDB;
use crate::models::{
    AboutUpsertRequest, HeroUpsertRequest, ServiceCardRequest, SlideRequest, TestimonialRequest,
};
use crate::services::content_service;

// ==================== HERO (singleton) ====================

#[get("/hero")]
pub async fn get_hero(db: web::Data<MongoDB>) -> impl Responder {
    match content_service::get_hero(&db).await {
        Ok(hero) => HttpResponse::Ok().json(serde_json::json!({ "success": true, "hero": hero })),
        Err(e) => e.to_response(),
    }
}

#[put("/hero")]
pub async fn put_hero(body: web::Json<HeroUpsertRequest>, db: web::Data<MongoDB>) -> impl Responder {
    match content_service::upsert_hero(&db, &body).await {
        Ok(hero) => HttpResponse::Ok().json(serde_json::json!({ "success": true, "hero": hero })),
        Err(e) => e.to_response(),
    }
}

// ==================== ABOUT (singleton with mission array) ====================

#[get("/about")]
pub async fn get_about(db: web::Data<MongoDB>) -> impl Responder {
    match content_service::get_about(&db).await {
        Ok(about) => HttpResponse::Ok().json(serde_json::json!({ "success": true, "about": about })),
        Err(e) => e.to_response(),
    }
}

#[put("/about")]
pub async fn put_about(
    body: web::Json<AboutUpsertRequest>,
    db: web::Data<MongoDB>,
) -> impl Responder {
    match content_service::upsert_about(&db, &body).await {
        Ok(about) => HttpResponse::Ok().json(serde_json::json!({ "success": true, "about": about })),
        Err(e) => e.to_response(),
    }
}

// ==================== SLIDES ====================

#[get("/slides")]
pub async fn list_slides(db: web::Data<MongoDB>) -> impl Responder {
    match content_service::list_slides(&db).await {
        Ok(slides) => {
            HttpResponse::Ok().json(serde_json::json!({ "success": true, "slides": slides }))
        }
        Err(e) => e.to_response(),
    }
}

#[post("/slides")]
pub async fn create_slide(body: web::Json<SlideRequest>, db: web::Data<MongoDB>) -> impl Responder {
    match content_service::create_slide(&db, &body).await {
        Ok(slide) => {
            HttpResponse::Created().json(serde_json::json!({ "success": true, "slide": slide }))
        }
        Err(e) => e.to_response(),
    }
}

#[put("/slides/{id}")]
pub async fn update_slide(
    path: web::Path<String>,
    body: web::Json<SlideRequest>,
    db: web::Data<MongoDB>,
) -> impl Responder {
    match content_service::update_slide(&db, &path.into_inner(), &body).await {
        Ok(slide) => HttpResponse::Ok().json(serde_json::json!({ "success": true, "slide": slide })),
        Err(e) => e.to_response(),
    }
}

#[delete("/slides/{id}")]
pub async fn delete_slide(path: web::Path<String>, db: web::Data<MongoDB>) -> impl Responder {
    match content_service::delete_slide(&db, &path.into_inner()).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "message": "Slide deleted",
        })),
        Err(e) => e.to_response(),
    }
}

// ==================== SERVICE CARDS ====================

#[get("/services")]
pub async fn list_service_cards(db: web::Data<MongoDB>) -> impl Responder {
    match content_service::list_service_cards(&db).await {
        Ok(cards) => {
            HttpResponse::Ok().json(serde_json::json!({ "success": true, "services": cards }))
        }
        Err(e) => e.to_response(),
    }
}

#[post("/services")]
pub async fn create_service_card(
    body: web::Json<ServiceCardRequest>,
    db: web::Data<MongoDB>,
) -> impl Responder {
    match content_service::create_service_card(&db, &body).await {
        Ok(card) => {
            HttpResponse::Created().json(serde_json::json!({ "success": true, "service": card }))
        }
        Err(e) => e.to_response(),
    }
}

#[put("/services/{id}")]
pub async fn update_service_card(
    path: web::Path<String>,
    body: web::Json<ServiceCardRequest>,
    db: web::Data<MongoDB>,
) -> impl Responder {
    match content_service::update_service_card(&db, &path.into_inner(), &body).await {
        Ok(card) => HttpResponse::Ok().json(serde_json::json!({ "success": true, "service": card })),
        Err(e) => e.to_response(),
    }
}

#[delete("/services/{id}")]
pub async fn delete_service_card(path: web::Path<String>, db: web::Data<MongoDB>) -> impl Responder {
    match content_service::delete_service_card(&db, &path.into_inner()).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "message": "Service card deleted",
        })),
        Err(e) => e.to_response(),
    }
}

// ==================== TESTIMONIALS ====================

#[get("/testimonials")]
pub async fn list_testimonials(db: web::Data<MongoDB>) -> impl Responder {
    match content_service::list_testimonials(&db).await {
        Ok(testimonials) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "testimonials": testimonials,
        })),
        Err(e) => e.to_response(),
    }
}

#[post("/testimonials")]
pub async fn create_testimonial(
    body: web::Json<TestimonialRequest>,
    db: web::Data<MongoDB>,
) -> impl Responder {
    match content_service::create_testimonial(&db, &body).await {
        Ok(testimonial) => HttpResponse::Created().json(serde_json::json!({
            "success": true,
            "testimonial": testimonial,
        })),
        Err(e) => e.to_response(),
    }
}

#[put("/testimonials/{id}")]
pub async fn update_testimonial(
    path: web::Path<String>,
    body: web::Json<TestimonialRequest>,
    db: web::Data<MongoDB>,
) -> impl Responder {
    match content_service::update_testimonial(&db, &path.into_inner(), &body).await {
        Ok(testimonial) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "testimonial": testimonial,
        })),
        Err(e) => e.to_response(),
    }
}

#[delete("/testimonials/{id}")]
pub async fn delete_testimonial(path: web::Path<String>, db: web::Data<MongoDB>) -> impl Responder {
    match content_service::delete_testimonial(&db, &path.into_inner()).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "message": "Testimonial deleted",
        })),
        Err(e) => e.to_response(),
    }
}
