//! Landing page: hero, services, portfolio, blog and contact sections.

use leptos::prelude::*;

use sitelogic::consts::{BLOG_STAGGER_MS, PORTFOLIO_STAGGER_MS};
use sitelogic::filter::ALL;

use crate::components::contact_form::ContactForm;
use crate::components::counter_grid::CounterGrid;
use crate::components::filter_grid::{FilterCard, FilterGrid};
use crate::components::newsletter::Newsletter;
use crate::components::reveal::Reveal;

const SERVICES: &[(&str, &str)] = &[
    (
        "Telegram botlar",
        "Buyurtma qabul qilish, to'lov va mijozlar bilan muloqotni avtomatlashtiruvchi botlar.",
    ),
    (
        "Veb-saytlar",
        "Tez ochiladigan, mobil qurilmalarga moslashgan zamonaviy saytlar.",
    ),
    (
        "Instagram marketing",
        "Kontent strategiyasi, targetlangan reklama va auditoriya o'stirish.",
    ),
    (
        "SMM xizmatlari",
        "Ijtimoiy tarmoqlarda brendingizni yuritish va rivojlantirish.",
    ),
];

fn portfolio_filters() -> Vec<(&'static str, &'static str)> {
    vec![
        (ALL, "Barchasi"),
        ("telegram", "Telegram"),
        ("web", "Veb"),
        ("instagram", "Instagram"),
    ]
}

fn portfolio_cards() -> Vec<FilterCard> {
    vec![
        FilterCard {
            category: "telegram",
            title: "Restoran buyurtma boti",
            blurb: "Menyu, savat va yetkazib berish bilan to'liq buyurtma oqimi.",
        },
        FilterCard {
            category: "web",
            title: "Onlayn do'kon sayti",
            blurb: "Katalog, qidiruv va to'lov integratsiyasi bilan internet-magazin.",
        },
        FilterCard {
            category: "instagram",
            title: "Go'zallik saloni sahifasi",
            blurb: "Uch oyda 12 mingdan ortiq faol obunachi yig'ilgan sahifa.",
        },
        FilterCard {
            category: "telegram",
            title: "Navbat boshqaruv boti",
            blurb: "Klinika uchun qabulga yozilish va eslatma yuborish tizimi.",
        },
        FilterCard {
            category: "web",
            title: "Ta'lim markazi portali",
            blurb: "Kurslar, o'qituvchilar va onlayn ro'yxatdan o'tish sahifalari.",
        },
        FilterCard {
            category: "instagram",
            title: "Kafe reklama kampaniyasi",
            blurb: "Targetlangan reklama orqali tashriflar ikki baravar oshdi.",
        },
    ]
}

fn blog_filters() -> Vec<(&'static str, &'static str)> {
    vec![
        (ALL, "Barchasi"),
        ("marketing", "Marketing"),
        ("texnologiya", "Texnologiya"),
        ("biznes", "Biznes"),
    ]
}

fn blog_cards() -> Vec<FilterCard> {
    vec![
        FilterCard {
            category: "marketing",
            title: "Instagram'da sotuvni oshirishning 5 usuli",
            blurb: "Kichik biznes uchun amaliy kontent va reklama maslahatlari.",
        },
        FilterCard {
            category: "texnologiya",
            title: "Telegram botlar biznesga nima beradi?",
            blurb: "Avtomatlashtirish qaysi jarayonlarda eng ko'p vaqt tejaydi.",
        },
        FilterCard {
            category: "biznes",
            title: "Onlayn savdoni yo'lga qo'yish bosqichlari",
            blurb: "Saytdan to'lovgacha bo'lgan yo'lni qanday rejalashtirish kerak.",
        },
        FilterCard {
            category: "marketing",
            title: "SMM strategiyasini qanday tuzish kerak",
            blurb: "Maqsad, auditoriya va kontent rejasi haqida qisqa qo'llanma.",
        },
    ]
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main>
            <section class="hero" id="home">
                <div class="container">
                    <h1 class="hero__title">"Biznesingizni onlayn olamga olib chiqamiz"</h1>
                    <p class="hero__subtitle">
                        "Telegram botlar, veb-saytlar va ijtimoiy tarmoq marketingi — barchasi bir joyda."
                    </p>
                    <a class="btn btn--primary" href="#contact">
                        "Bog'lanish"
                    </a>
                    <CounterGrid />
                </div>
            </section>

            <section class="services" id="services">
                <div class="container">
                    <h2 class="section-title">"Xizmatlarimiz"</h2>
                    <div class="services__grid">
                        {SERVICES
                            .iter()
                            .map(|&(title, blurb)| {
                                view! {
                                    <Reveal>
                                        <div class="service-card">
                                            <h3 class="service-card__title">{title}</h3>
                                            <p class="service-card__blurb">{blurb}</p>
                                        </div>
                                    </Reveal>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </section>

            <section class="portfolio" id="portfolio">
                <div class="container">
                    <h2 class="section-title">"Portfolio"</h2>
                    <FilterGrid
                        filters=portfolio_filters()
                        cards=portfolio_cards()
                        stagger_ms=PORTFOLIO_STAGGER_MS
                    />
                </div>
            </section>

            <section class="blog" id="blog">
                <div class="container">
                    <h2 class="section-title">"Blog"</h2>
                    <FilterGrid
                        filters=blog_filters()
                        cards=blog_cards()
                        stagger_ms=BLOG_STAGGER_MS
                    />
                </div>
            </section>

            <section class="contact" id="contact">
                <div class="container">
                    <h2 class="section-title">"Biz bilan bog'laning"</h2>
                    <ContactForm />
                    <Newsletter />
                </div>
            </section>
        </main>
    }
}
