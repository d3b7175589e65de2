//! Record builders and fixture catalogs for tests.
//!
//! Builders fill every field with a neutral default so a test only sets the
//! fields it cares about.

use chrono::NaiveDate;

use crate::model::{Course, NewsItem, Product, Program};
use crate::store::{Catalogs, InMemorySource};

/// Fixed evaluation date so date-dependent sorts are reproducible.
pub fn today() -> NaiveDate {
    date(2024, 6, 15)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

pub fn program(id: &str, title: &str) -> Program {
    Program {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        category: "Maraîchage".to_string(),
        level: "Débutant".to_string(),
        duration_weeks: 6,
        location: "Thiès".to_string(),
        price: 25_000.0,
        rating: 4.0,
        enrolled: 20,
        start_date: date(2024, 3, 1),
        certified: false,
        tags: Vec::new(),
    }
}

pub fn course(id: &str, title: &str) -> Course {
    Course {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        instructor: "Formateur".to_string(),
        category: "Production végétale".to_string(),
        level: "Intermédiaire".to_string(),
        duration_hours: 10.0,
        price: 5_000.0,
        rating: 4.0,
        enrolled_students: 10,
        published_at: date(2024, 1, 15),
        has_certificate: false,
        tags: Vec::new(),
    }
}

pub fn product(id: &str, name: &str) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        category: "Légumes".to_string(),
        producer: "Producteur".to_string(),
        location: "Dakar".to_string(),
        price: 1_000.0,
        unit: "kg".to_string(),
        rating: 4.0,
        sales: 10,
        listed_at: date(2024, 5, 1),
        in_stock: true,
        organic: false,
        tags: Vec::new(),
    }
}

pub fn news_item(id: &str, title: &str) -> NewsItem {
    NewsItem {
        id: id.to_string(),
        title: title.to_string(),
        excerpt: String::new(),
        category: "Coopérative".to_string(),
        author: "Rédaction".to_string(),
        published_at: date(2024, 5, 20),
        views: 100,
        featured: false,
        tags: Vec::new(),
    }
}

/// Twelve courses: three at `Débutant`, two free, one titled
/// "Entrepreneuriat Agricole".
pub fn course_catalog() -> Vec<Course> {
    let info: [(&str, &str, &str, &str); 12] = [
        ("c01", "Irrigation goutte à goutte", "Production végétale", "Débutant"),
        ("c02", "Compostage et fertilité des sols", "Agroécologie", "Intermédiaire"),
        ("c03", "Entrepreneuriat Agricole", "Gestion d'exploitation", "Avancé"),
        ("c04", "Aviculture villageoise", "Élevage", "Débutant"),
        ("c05", "Maraîchage sous serre", "Production végétale", "Intermédiaire"),
        ("c06", "Transformation du mil", "Transformation", "Intermédiaire"),
        ("c07", "Comptabilité de la ferme", "Gestion d'exploitation", "Intermédiaire"),
        ("c08", "Embouche bovine", "Élevage", "Avancé"),
        ("c09", "Smartphones et météo agricole", "Numérique agricole", "Débutant"),
        ("c10", "Agroforesterie", "Agroécologie", "Avancé"),
        ("c11", "Semences paysannes", "Production végétale", "Intermédiaire"),
        ("c12", "Santé animale de base", "Élevage", "Intermédiaire"),
    ];
    // hours, price, rating, enrolled, certificate, tags
    #[allow(clippy::type_complexity)]
    let stats: [(f64, f64, f64, u32, bool, &[&str]); 12] = [
        (4.0, 0.0, 4.6, 120, true, &["irrigation", "eau"]),
        (12.0, 7_500.0, 4.8, 85, true, &["sol", "bio"]),
        (24.0, 15_000.0, 4.4, 98, true, &["gestion"]),
        (8.0, 5_000.0, 4.1, 8, false, &["volaille"]),
        (18.0, 10_000.0, 4.5, 64, true, &["serre", "irrigation"]),
        (6.0, 6_000.0, 3.9, 31, false, &["céréales"]),
        (15.0, 8_000.0, 4.2, 47, true, &["gestion"]),
        (30.0, 20_000.0, 4.7, 22, true, &["bovins"]),
        (3.0, 0.0, 4.3, 150, false, &["numérique"]),
        (22.0, 12_000.0, 4.6, 19, true, &["bio", "arbres"]),
        (9.0, 4_000.0, 4.0, 40, false, &["semences", "bio"]),
        (14.0, 9_000.0, 4.5, 56, true, &["santé"]),
    ];

    info.iter()
        .zip(stats.iter())
        .enumerate()
        .map(|(i, ((id, title, category, level), stat))| {
            let (hours, price, rating, enrolled, cert, tags) = *stat;
            let mut c = course(id, title);
            c.description = format!("Module pratique : {}", title.to_lowercase());
            c.category = category.to_string();
            c.level = level.to_string();
            c.duration_hours = hours;
            c.price = price;
            c.rating = rating;
            c.enrolled_students = enrolled;
            c.has_certificate = cert;
            c.published_at = date(2024, 1 + (i as u32 % 5), 1 + i as u32);
            c.tags = tags.iter().map(|t| t.to_string()).collect();
            c
        })
        .collect()
}

/// `count` courses numbered `c1..=cN`, in catalog order.
pub fn numbered_courses(count: usize) -> Vec<Course> {
    (1..=count)
        .map(|i| {
            let mut c = course(&format!("c{}", i), &format!("Cours {}", i));
            c.enrolled_students = i as u32;
            c
        })
        .collect()
}

/// A small source with every catalog populated.
pub fn sample_source() -> InMemorySource {
    let mut catalogs = Catalogs::default();
    catalogs.programs = vec![
        program("p1", "Maraîchage biologique"),
        program("p2", "Gestion de coopérative"),
    ];
    catalogs.courses = course_catalog();
    catalogs.products = vec![
        product("m1", "Oignons violets de Galmi"),
        product("m2", "Miel de mangrove"),
    ];
    catalogs.news = vec![news_item("n1", "Ouverture des inscriptions")];
    InMemorySource::new(catalogs)
}
