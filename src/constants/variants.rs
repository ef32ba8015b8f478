use crate::models::domain::variant::{
    BurnField, CallToAction, ChoiceField, ContactField, ContactKind, PromptTemplate,
    ShortContactPolicy, SinkPolicy, TextField, VariantDescriptor,
};

const PLAYBOOK_URL: &str = "https://docs.google.com/";

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn choice(label: &str, options: &[&str]) -> ChoiceField {
    ChoiceField {
        label: label.to_string(),
        options: strings(options),
    }
}

fn standard_regions() -> ChoiceField {
    choice(
        "🗺️ Preferred Regions",
        &["Latin America", "Europe", "SE Asia", "Africa", "No Preference"],
    )
}

fn whatsapp_contact(policy: ShortContactPolicy) -> ContactField {
    ContactField {
        kind: ContactKind::Phone,
        label: "WhatsApp Number (with Country Code)".to_string(),
        placeholder: "e.g. +1 305-555-0123".to_string(),
        caption: "By submitting your number, you agree that we may contact you via WhatsApp with travel tips and guides.".to_string(),
        min_length: 7,
        short_contact_policy: policy,
        missing_message: "Please enter your WhatsApp number to receive the guide!".to_string(),
        format_message: "Please make sure to include your country code (e.g. +1 for USA, +44 for UK)".to_string(),
    }
}

fn playbook_offer() -> CallToAction {
    CallToAction {
        title: "🎁 Bonus: Download the full Travel Hacking Playbook".to_string(),
        body: "Get the PDF guide that explains exactly how to book the flights to these cities for free.".to_string(),
        link_label: "👉 Download Playbook Here".to_string(),
        url: PLAYBOOK_URL.to_string(),
    }
}

fn global_lifestyle() -> VariantDescriptor {
    VariantDescriptor {
        id: "global-lifestyle".to_string(),
        title: "🌍 The Global Lifestyle Architect".to_string(),
        tagline: "Design your ideal life abroad. Whether you are looking for cheaper living, better quality of life, or a new adventure, use AI to find your perfect base.".to_string(),
        contact: whatsapp_contact(ShortContactPolicy::Halt),
        budget: choice(
            "💰 Monthly Budget (USD)",
            &["<$1k", "$1k-$2k", "$2k-$3k", "$3k-$5k", "$5k+"],
        ),
        regions: standard_regions(),
        vibe: TextField {
            label: "✨ What is your vision?".to_string(),
            placeholder: "e.g. I need a modern apartment, strong crypto community, and proximity to nature.".to_string(),
        },
        income_sources: None,
        current_burn: None,
        prompt: PromptTemplate {
            persona: "a high-net-worth relocation consultant and security expert".to_string(),
            task: "Find the 2 cities where this entrepreneur can best globalize their lifestyle.".to_string(),
            vibe_label: "Vision".to_string(),
            closing: None,
        },
        sink_policy: SinkPolicy::BestEffort,
        submit_label: "Find My Global Base 🚀".to_string(),
        progress_message: "Analyzing cost of living, safety data, and lifestyle matches...".to_string(),
        success_message: "Analysis Complete. Here are your top recommendations:".to_string(),
        call_to_action: playbook_offer(),
    }
}

fn digital_nomad() -> VariantDescriptor {
    VariantDescriptor {
        id: "digital-nomad".to_string(),
        title: "💻 Digital Nomad Base Finder".to_string(),
        tagline: "Tell us how you work and live, and we will match you with two remote-work hubs.".to_string(),
        contact: ContactField {
            kind: ContactKind::Email,
            label: "Email Address".to_string(),
            placeholder: "e.g. you@example.com".to_string(),
            caption: "By submitting your email, you agree to receive our nomad newsletter. Unsubscribe anytime.".to_string(),
            min_length: 7,
            short_contact_policy: ShortContactPolicy::Halt,
            missing_message: "Please enter your email to receive your city guide!".to_string(),
            format_message: "That email address does not look right. Please check it and try again.".to_string(),
        },
        budget: choice(
            "💰 Monthly Budget (USD)",
            &["<$1.5k", "$1.5k-$2.5k", "$2.5k-$4k", "$4k+"],
        ),
        regions: standard_regions(),
        vibe: TextField {
            label: "✨ Describe your ideal work-life vibe".to_string(),
            placeholder: "e.g. fast wifi, coworking spaces, surf breaks within 20 minutes.".to_string(),
        },
        income_sources: None,
        current_burn: None,
        prompt: PromptTemplate {
            persona: "a digital nomad strategist who has lived in over 40 countries".to_string(),
            task: "Pick the 2 best remote-work bases, weighing internet quality, coworking scene and visa options.".to_string(),
            vibe_label: "Vibe".to_string(),
            closing: Some("End with one practical tip for the first week in either city.".to_string()),
        },
        sink_policy: SinkPolicy::BestEffort,
        submit_label: "Match Me With a City 🌐".to_string(),
        progress_message: "Checking wifi speeds, coworking spaces and visa rules...".to_string(),
        success_message: "Done! Here are your best-fit nomad bases:".to_string(),
        call_to_action: playbook_offer(),
    }
}

fn escape_plan() -> VariantDescriptor {
    VariantDescriptor {
        id: "escape-plan".to_string(),
        title: "🧭 The Escape Plan Calculator".to_string(),
        tagline: "See how far your current income could take you abroad, and where your burn rate buys the most life.".to_string(),
        contact: whatsapp_contact(ShortContactPolicy::Halt),
        budget: choice(
            "🎯 Target Monthly Budget (USD)",
            &["<$1k", "$1k-$2k", "$2k-$3k", "$3k-$5k", "$5k+"],
        ),
        regions: standard_regions(),
        vibe: TextField {
            label: "✨ What would your ideal week look like?".to_string(),
            placeholder: "e.g. mornings at the gym, afternoons building my business, weekends at the beach.".to_string(),
        },
        income_sources: Some(choice(
            "💼 Main Income Source",
            &[
                "Remote Salary",
                "Freelance / Agency",
                "Online Business",
                "Passive / Investments",
                "Pension",
            ],
        )),
        current_burn: Some(BurnField {
            label: "🔥 Current Monthly Spend (USD)".to_string(),
            min: 1000,
            default: 4000,
            step: 500,
        }),
        prompt: PromptTemplate {
            persona: "a relocation and cost-of-living analyst who specialises in geo-arbitrage".to_string(),
            task: "Compare their current monthly spend with the real cost of living abroad and choose the 2 cities with the biggest quality-of-life gain.".to_string(),
            vibe_label: "Ideal week".to_string(),
            closing: Some("End with the estimated monthly savings for each city and an encouraging closing statement.".to_string()),
        },
        sink_policy: SinkPolicy::BestEffort,
        submit_label: "Calculate My Escape 🧮".to_string(),
        progress_message: "Comparing your burn rate with living costs around the world...".to_string(),
        success_message: "Your escape plan is ready:".to_string(),
        call_to_action: playbook_offer(),
    }
}

fn budget_backpacker() -> VariantDescriptor {
    VariantDescriptor {
        id: "budget-backpacker".to_string(),
        title: "🎒 Budget Backpacker Planner".to_string(),
        tagline: "Stretch every dollar. Find two places where a small budget still buys a great adventure.".to_string(),
        contact: whatsapp_contact(ShortContactPolicy::Advisory),
        budget: choice(
            "💰 Monthly Budget (USD)",
            &["<$700", "$700-$1k", "$1k-$1.5k", "$1.5k+"],
        ),
        regions: standard_regions(),
        vibe: TextField {
            label: "✨ What kind of trip are you after?".to_string(),
            placeholder: "e.g. hostels with a social vibe, street food, hiking.".to_string(),
        },
        income_sources: None,
        current_burn: None,
        prompt: PromptTemplate {
            persona: "a veteran budget backpacker and travel safety advisor".to_string(),
            task: "Choose 2 destinations where this traveller can stay for at least a month within budget.".to_string(),
            vibe_label: "Trip style".to_string(),
            closing: None,
        },
        sink_policy: SinkPolicy::BestEffort,
        submit_label: "Plan My Trip 🎒".to_string(),
        progress_message: "Hunting for cheap beds, good food and safe streets...".to_string(),
        success_message: "Here are your budget-friendly picks:".to_string(),
        call_to_action: playbook_offer(),
    }
}

fn concierge() -> VariantDescriptor {
    VariantDescriptor {
        id: "concierge".to_string(),
        title: "🛎️ Private Relocation Concierge".to_string(),
        tagline: "A personal relocation brief, followed up by one of our advisors on WhatsApp.".to_string(),
        contact: whatsapp_contact(ShortContactPolicy::Halt),
        budget: choice(
            "💰 Monthly Budget (USD)",
            &["$3k-$5k", "$5k-$10k", "$10k+"],
        ),
        regions: standard_regions(),
        vibe: TextField {
            label: "✨ Describe the lifestyle you want".to_string(),
            placeholder: "e.g. gated community, international schools, golf.".to_string(),
        },
        income_sources: None,
        current_burn: None,
        prompt: PromptTemplate {
            persona: "a private relocation concierge for high-net-worth families and a security expert".to_string(),
            task: "Shortlist the 2 cities that best fit this client's lifestyle and budget.".to_string(),
            vibe_label: "Lifestyle".to_string(),
            closing: None,
        },
        sink_policy: SinkPolicy::Required,
        submit_label: "Request My Brief 🛎️".to_string(),
        progress_message: "Preparing your private relocation brief...".to_string(),
        success_message: "Your brief is ready. An advisor will follow up shortly:".to_string(),
        call_to_action: playbook_offer(),
    }
}

/// The five stock variants, default first.
pub fn builtin_variants() -> Vec<VariantDescriptor> {
    vec![
        global_lifestyle(),
        digital_nomad(),
        escape_plan(),
        budget_backpacker(),
        concierge(),
    ]
}
