//! Literal content of the landing page.

#[derive(Debug, Clone, Copy)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct GalleryItem {
    pub url: &'static str,
    pub title: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Advantage {
    pub icon: &'static str,
    pub text: &'static str,
}

pub const HEADLINE: &str = "Натяжные потолки";
pub const HEADLINE_CITY: &str = "в Артёме";
pub const PITCH: &str = "Профессиональный монтаж натяжных потолков любой сложности. \
                         Превратим ваш потолок в произведение искусства.";
pub const COPYRIGHT: &str = "© 2024 Натяжные потолки в Артёме. Все права защищены.";

pub const SERVICES: [Service; 4] = [
    Service {
        icon: "sparkles",
        title: "Глянцевые потолки",
        description: "Визуально увеличивают пространство, создают эффект зеркальной поверхности",
    },
    Service {
        icon: "moon",
        title: "Матовые потолки",
        description: "Классический вариант с элегантной текстурой, скрывает неровности основного потолка",
    },
    Service {
        icon: "layers",
        title: "Многоуровневые конструкции",
        description: "Создание уникального дизайна с использованием нескольких уровней и подсветки",
    },
    Service {
        icon: "star",
        title: "Звездное небо",
        description: "Светодиодная подсветка, имитирующая ночное небо с мерцающими звездами",
    },
];

pub const GALLERY: [GalleryItem; 3] = [
    GalleryItem {
        url: "https://cdn.poehali.dev/projects/f53b5bea-76e3-46c2-a3df-d5e08f4018fb/files/450733d0-0a0a-4adb-b5cb-0d6ae05578c7.jpg",
        title: "Гостиная",
    },
    GalleryItem {
        url: "https://cdn.poehali.dev/projects/f53b5bea-76e3-46c2-a3df-d5e08f4018fb/files/19351505-f720-4928-afb8-846871bfa4a7.jpg",
        title: "Спальня",
    },
    GalleryItem {
        url: "https://cdn.poehali.dev/projects/f53b5bea-76e3-46c2-a3df-d5e08f4018fb/files/de6d7c44-5ae5-446c-8342-6b2e52385f13.jpg",
        title: "Кухня",
    },
];

pub const ADVANTAGES: [Advantage; 4] = [
    Advantage { icon: "clock", text: "Монтаж за 1 день" },
    Advantage { icon: "shield", text: "Гарантия 10 лет" },
    Advantage { icon: "award", text: "Опыт более 5 лет" },
    Advantage { icon: "zap", text: "Без пыли и грязи" },
];
