use maud::{html, Markup};

use super::content::{ADVANTAGES, COPYRIGHT, GALLERY, HEADLINE, HEADLINE_CITY, PITCH, SERVICES};
use super::LandingPage;
use crate::html::page;

const FAB_STYLE: &str = "position:fixed;bottom:1.5rem;right:1.5rem;width:4rem;height:4rem;\
                         border-radius:50%;background:#22c55e;color:#fff;display:flex;\
                         align-items:center;justify-content:center";

pub(super) fn render_landing(landing: &LandingPage<'_>) -> Markup {
    let contact = landing.contact();
    let tel = contact.tel_url();
    let whatsapp = contact.whatsapp_url();

    let body = html! {
        section class="hero" style="min-height:100vh;display:flex;align-items:center;text-align:center;background:#f8fafc" {
            div class="container" {
                h1 {
                    (HEADLINE)
                    span style="display:block;color:#2563eb" { (HEADLINE_CITY) }
                }
                p class="muted" { (PITCH) }
                a class="btn" href=(tel) { "Позвонить сейчас" }
                a class="btn btn-outline" href="#services" { "Узнать больше" }
                div class="advantages" style="margin-top:2rem;display:flex;flex-wrap:wrap;justify-content:center;gap:1.5rem" {
                    @for advantage in ADVANTAGES {
                        div class="advantage" {
                            span class={ "icon icon-" (advantage.icon) } {}
                            span { (advantage.text) }
                        }
                    }
                }
            }
        }

        section id="services" style="padding:5rem 0" {
            div class="container" {
                h2 style="text-align:center" { "Наши услуги" }
                p class="muted" style="text-align:center" {
                    "Предлагаем широкий выбор натяжных потолков для любого интерьера"
                }
                div class="grid" {
                    @for service in SERVICES {
                        div class="card service" {
                            div class="card-body" style="text-align:center" {
                                span class={ "icon icon-" (service.icon) } {}
                                h3 { (service.title) }
                                p class="muted" { (service.description) }
                            }
                        }
                    }
                }
            }
        }

        section style="padding:5rem 0;background:#f8fafc" {
            div class="container" {
                h2 style="text-align:center" { "Наши работы" }
                p class="muted" style="text-align:center" { "Примеры выполненных проектов" }
                div class="grid" {
                    @for item in GALLERY {
                        figure class="gallery-item" style="margin:0" {
                            img src=(item.url) alt=(item.title)
                                style="width:100%;aspect-ratio:4/3;object-fit:cover;border-radius:.5rem";
                            figcaption { (item.title) }
                        }
                    }
                }
            }
        }

        section id="contact" style="padding:5rem 0;text-align:center" {
            div class="container" {
                h2 { "Свяжитесь с нами" }
                p class="muted" { "Готовы обсудить ваш проект? Звоните или пишите в WhatsApp!" }
                div class="card" {
                    div class="card-body" {
                        p style="font-size:1.5rem;font-weight:600" {
                            a href=(tel) { (contact.display_phone) }
                        }
                        a class="btn" href=(tel) { "Позвонить" }
                        a class="btn btn-outline" href=(whatsapp) target="_blank" rel="noopener noreferrer" {
                            "Написать в WhatsApp"
                        }
                        p class="muted" { (contact.city) }
                    }
                }
            }
        }

        a href=(landing.toggled().href())
            class="whatsapp-fab" aria-label="WhatsApp" style=(FAB_STYLE) {
            span class="icon icon-message-circle" {}
        }

        @if landing.whatsapp_open() {
            div id="whatsapp-popover" class="card" style="position:fixed;bottom:6rem;right:1.5rem" {
                div class="card-body" {
                    p { strong { "Связаться с нами" } }
                    a class="btn" href=(whatsapp) target="_blank" rel="noopener noreferrer" { "Написать" }
                    a class="btn btn-outline" href=(tel) { "Позвонить" }
                }
            }
        }

        footer style="background:#0f172a;color:#94a3b8;padding:2rem 0;text-align:center" {
            p { (COPYRIGHT) }
        }
    };

    page("Натяжные потолки в Артёме", None, body)
}
