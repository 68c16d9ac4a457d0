//! The portfolio page: hero, experience, education, projects, contact.

use leptos::prelude::*;

use crate::components::contact_links::ContactLinks;
use crate::components::education_card::EducationCard;
use crate::components::hero::Hero;
use crate::components::nav_bar::NavBar;
use crate::components::project_card::ProjectCard;
use crate::components::timeline::TimelineItem;

/// The whole page. Section ids match the nav anchors; marker classes on
/// titles, cards, and links are what the interactivity units key off.
#[component]
pub fn PortfolioPage() -> impl IntoView {
    view! {
        <NavBar/>
        <main>
            <Hero/>

            <section id="experience" class="experience">
                <h2 class="section-title">"Experience"</h2>
                <ul class="timeline">
                    <TimelineItem
                        period="2023 — now"
                        title="Senior Web Developer"
                        organization="Halftone Labs"
                        summary="Own the storefront platform end to end: rendering pipeline, checkout flows, and the tooling the rest of the team builds pages with."
                    />
                    <TimelineItem
                        period="2020 — 2023"
                        title="Backend Developer"
                        organization="Parcelworks"
                        summary="Built routing and tracking services for a parcel network, then moved the dashboard stack to server-driven rendering."
                    />
                    <TimelineItem
                        period="2018 — 2020"
                        title="Junior Developer"
                        organization="Studio North"
                        summary="Shipped marketing sites and internal tools; learned to care about page weight the hard way."
                    />
                </ul>
            </section>

            <section id="education" class="education">
                <h2 class="section-title">"Education"</h2>
                <div class="education-grid">
                    <EducationCard
                        degree="BSc Computer Science"
                        school="University of Oregon"
                        years="2014 — 2018"
                        note="Focus on networks and compilers; wrote a toy scheme interpreter for my capstone."
                    />
                    <EducationCard
                        degree="Certificate, Interaction Design"
                        school="Pacific Design School"
                        years="2019"
                        note="Evening program. Mostly an excuse to argue about typography."
                    />
                </div>
            </section>

            <section id="projects" class="projects">
                <h2 class="section-title">"Projects"</h2>
                <div class="project-grid">
                    <ProjectCard
                        name="tidetable"
                        description="A tide-prediction CLI and tiny web frontend for the Oregon coast, with offline harmonic constants."
                        image_src="/images/tidetable.webp"
                        source_href="https://github.com/jordanreyes/tidetable"
                    />
                    <ProjectCard
                        name="inkwell"
                        description="Minimal static-site generator that turns a folder of notes into a linked garden."
                        image_src="/images/inkwell.webp"
                        source_href="https://github.com/jordanreyes/inkwell"
                    />
                    <ProjectCard
                        name="looper"
                        description="Browser drum machine built around the sample-accurate scheduling the Web Audio clock allows."
                        image_src="/images/looper.webp"
                        source_href="https://github.com/jordanreyes/looper"
                    />
                </div>
            </section>

            <section id="contact" class="contact">
                <h2 class="section-title">"Get in touch"</h2>
                <ContactLinks/>
            </section>
        </main>
    }
}
