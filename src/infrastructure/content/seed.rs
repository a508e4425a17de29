//! Studio catalogue used by [`InMemoryContentSource::seeded`].
//!
//! [`InMemoryContentSource::seeded`]: super::in_memory::InMemoryContentSource::seeded

use crate::domain::value_objects::record_kind::RecordKind;
use serde_json::{Value, json};

/// Raw seed list for `kind`, in display order.
pub(crate) fn records(kind: RecordKind) -> Vec<Value> {
    match kind {
        RecordKind::Portfolio => portfolio(),
        RecordKind::Service => services(),
        RecordKind::ProcessStep => process_steps(),
        RecordKind::Testimonial => testimonials(),
        RecordKind::Faq => faqs(),
    }
}

fn portfolio() -> Vec<Value> {
    vec![
        json!({
            "id": "pf-1",
            "title": "Underpass graffiti",
            "category": "murals",
            "image": "https://images.unsplash.com/photo-1487452066049-a710f7296400",
            "description": "Large-scale underpass piece with bright colours and a modern design.",
            "featured": true
        }),
        json!({
            "id": "pf-2",
            "title": "Abstract graffiti",
            "category": "abstract",
            "image": "https://images.unsplash.com/photo-1604716053460-3f66248bf8de",
            "description": "Colourful abstract composition built from geometric elements.",
            "featured": true
        }),
        json!({
            "id": "pf-3",
            "title": "Graffiti character",
            "category": "portraits",
            "image": "https://images.unsplash.com/photo-1581850518616-bcb8077a2336",
            "description": "Bright character with detailed linework and an expressive face.",
            "featured": false
        }),
        json!({
            "id": "pf-4",
            "title": "Commercial decoration",
            "category": "commercial",
            "image": "https://images.pexels.com/photos/1227511/pexels-photo-1227511.jpeg",
            "description": "Shopping centre decoration carrying the client's corporate elements.",
            "featured": false
        }),
        json!({
            "id": "pf-5",
            "title": "Street art composition",
            "category": "murals",
            "image": "https://images.unsplash.com/photo-1530406831759-15c5c0cbce8b",
            "description": "Street composition in a well-known alley with many artistic details.",
            "featured": false
        }),
        json!({
            "id": "pf-6",
            "title": "Car design",
            "category": "automotive",
            "image": "https://images.unsplash.com/photo-1583225238311-0278ade1070d",
            "description": "Exclusive artwork applied to a car body.",
            "featured": false
        }),
    ]
}

fn services() -> Vec<Value> {
    vec![
        json!({"id": "sv-1", "icon": "Palette", "title": "Art in a day",
               "description": "Fast, high-quality artistic decoration of any object in a single day.",
               "price": "30,000 ₽", "order": 1}),
        json!({"id": "sv-2", "icon": "Brush", "title": "Artistic decoration",
               "description": "Graffiti and street-art decoration of walls, facades and interiors.",
               "price": "1,500–7,000 ₽/m²", "order": 2}),
        json!({"id": "sv-3", "icon": "Building", "title": "Rapid interior makeover",
               "description": "Quick interior transformation with modern graffiti techniques.",
               "price": "from 50,000 ₽", "order": 3}),
        json!({"id": "sv-4", "icon": "Car", "title": "Vehicle design",
               "description": "Exclusive artwork for cars and motorcycles.",
               "price": "from 80,000 ₽", "order": 4}),
        json!({"id": "sv-5", "icon": "Camera", "title": "Photo zone",
               "description": "Design and build of photo zones for events and venues.",
               "price": "from 40,000 ₽", "order": 5}),
        json!({"id": "sv-6", "icon": "Megaphone", "title": "Advertising of any complexity",
               "description": "Outdoor advertising with graffiti and street-art elements.",
               "price": "from 25,000 ₽", "order": 6}),
    ]
}

fn process_steps() -> Vec<Value> {
    vec![
        json!({"id": "ps-1", "step": 1, "title": "Consultation", "icon": "MessageSquare",
               "description": "We discuss your ideas and settle the scope and budget."}),
        json!({"id": "ps-2", "step": 2, "title": "Sketch", "icon": "Sketch",
               "description": "We draw a detailed sketch of the future piece."}),
        json!({"id": "ps-3", "step": 3, "title": "Approval", "icon": "CheckCircle",
               "description": "We refine the sketch with you and approve the final version."}),
        json!({"id": "ps-4", "step": 4, "title": "Painting", "icon": "Brush",
               "description": "We get to work with quality materials."}),
        json!({"id": "ps-5", "step": 5, "title": "Handover", "icon": "Star",
               "description": "We finish, clean up and hand over the result."}),
    ]
}

fn testimonials() -> Vec<Value> {
    vec![
        json!({"id": "ts-1", "name": "Alexey Petrov", "role": "Cafe owner", "rating": 5,
               "text": "They turned our cafe into a real work of art. Guests love the new interior."}),
        json!({"id": "ts-2", "name": "Maria Ivanova", "role": "Marketing director", "rating": 5,
               "text": "We ordered an office makeover. Fast, clean work, and a 5-year warranty."}),
        json!({"id": "ts-3", "name": "Dmitry Kozlov", "role": "Garage owner", "rating": 5,
               "text": "The wall piece on our garage became a local landmark. Recommended."}),
    ]
}

fn faqs() -> Vec<Value> {
    vec![
        json!({"id": "fq-1", "order": 1, "question": "How long does a project take?",
               "answer": "Simple pieces take 1-2 days, complex projects up to a week."}),
        json!({"id": "fq-2", "order": 2, "question": "Do you give a warranty?",
               "answer": "Yes, up to 5 years on all work when the usage conditions are met."}),
        json!({"id": "fq-3", "order": 3, "question": "Do you work outside the city?",
               "answer": "Yes, we travel and take orders across the country."}),
        json!({"id": "fq-4", "order": 4, "question": "How is the price calculated?",
               "answer": "It depends on complexity, area and materials. Use the calculator for an estimate."}),
    ]
}
