use yew::prelude::*;

use super::decor::{Card, LiftButton, TeamMember};
use super::funnel::HiringFunnel;

const TEAM: &[(&str, &str, &str)] = &[
    ("Maria Lind", "Head of Talent", "ML"),
    ("Jonas Berg", "Technical Recruiter", "JB"),
    ("Aino Salo", "Engineering Advisor", "AS"),
];

const PLANS: &[(&str, &str, &str)] = &[
    ("Starter", "€2,900", "One role, shortlist in three weeks."),
    ("Growth", "€6,500", "Up to three roles, dedicated recruiter."),
    ("Scale", "Custom", "Ongoing hiring with an embedded team."),
];

#[derive(Properties, PartialEq)]
pub struct SectionsProps {
    pub on_book: Callback<()>,
}

#[function_component(Sections)]
pub fn sections(props: &SectionsProps) -> Html {
    let book = {
        let on_book = props.on_book.clone();
        Callback::from(move |_: MouseEvent| on_book.emit(()))
    };

    html! {
        <main class="main-block">
            <section id="general" class="section">
                <h1>{"Hiring that never stops working for you"}</h1>
                <p>{"We find, screen and interview engineers so your team only meets the ones worth hiring."}</p>
                <div class="card-grid">
                    <Card>
                        <h3>{"Sourcing"}</h3>
                        <p>{"Candidates from communities, referrals and our own network."}</p>
                    </Card>
                    <Card>
                        <h3>{"Screening"}</h3>
                        <p>{"Every applicant talks to a person before they reach you."}</p>
                    </Card>
                    <Card>
                        <h3>{"Interviews"}</h3>
                        <p>{"Technical interviews run by engineers, written up for you."}</p>
                    </Card>
                </div>
            </section>

            <section id="process" class="section">
                <h2>{"How the funnel narrows"}</h2>
                <HiringFunnel />
            </section>

            <section id="pricing" class="section">
                <h2>{"Pricing"}</h2>
                <div class="card-grid">
                    { for PLANS.iter().map(|(name, price, blurb)| html! {
                        <Card class="plan">
                            <h3>{*name}</h3>
                            <p class="plan-price">{*price}</p>
                            <p>{*blurb}</p>
                        </Card>
                    }) }
                </div>
            </section>

            <section id="team" class="section">
                <h2>{"Who you'll work with"}</h2>
                <div class="team-list">
                    { for TEAM.iter().map(|(name, role, initials)| html! {
                        <TeamMember name={*name} role={*role} initials={*initials} />
                    }) }
                </div>
                <LiftButton class="book-call" onclick={book}>{"Book an intro call"}</LiftButton>
            </section>
        </main>
    }
}
