use crate::companies::{Company, CompanyId, JobTemplate};

pub const SYSTEM_PROMPT: &str = "You are The Sales Team — TechCrossIT's AI-powered B2B sales unit.
You are expert at research, persuasion, and closing. Your outputs are specific, personalised, and actionable.
Never use generic templates — always weave in the client's context and the prospect's situation.
Be direct, confident, and value-focused. Every piece of output should move a deal forward.";

const PROSPECT_RESEARCH: &str = "Research the following prospect and produce a structured intelligence brief.
Include:
- Company overview (size, sector, revenue estimate, key products/services)
- Key decision-makers (names, titles, LinkedIn cues from brief)
- Recent news / trigger events (funding, expansion, pain signals)
- Budget signals and procurement cycle
- Recommended angle / hook for outreach
- 3 personalised conversation starters

Prospect brief: {{brief}}
Context: {{context}}";

const COLD_OUTREACH_EMAIL: &str = "Write a highly personalised cold outreach email.
Rules: Subject line under 8 words, opening line references something specific about the prospect,
value prop in 1-2 sentences, social proof (1 sentence), clear single CTA (meeting request).
Max 150 words in the body. Tone: {{tone}}.
Brief: {{brief}}
Context: {{context}}";

const FOLLOWUP_SEQUENCE: &str = "Write a 5-email follow-up sequence for a prospect who hasn't responded.
Email 1 (day 3): soft bump
Email 2 (day 7): add new value / insight
Email 3 (day 14): different angle / case study
Email 4 (day 21): social proof / urgency
Email 5 (day 30): graceful breakup
Each email: subject line + full body copy (max 120 words each). Tone: {{tone}}.
Brief / original outreach context: {{brief}}
Context: {{context}}";

const PITCH_DECK_OUTLINE: &str = "Create a structured pitch deck outline for the following opportunity.
Provide 10-12 slides with: slide title, key message (1 sentence), bullet points (3-5), and visual suggestion.
Slides must tell a story: Problem → Solution → Market → Product → Traction → Team → Ask.
Brief: {{brief}}
Context: {{context}}";

const COMPETITIVE_ANALYSIS: &str = "Produce a competitive analysis for the following market/product.
Cover: 4-6 key competitors, feature comparison matrix, pricing comparison, strengths and weaknesses,
positioning gaps we can exploit, and a recommended differentiation strategy.
Format clearly for use in a sales conversation. Brief: {{brief}}
Context: {{context}}";

const OBJECTION_HANDLER: &str = "Write a complete objection-handling script for common sales objections.
For each objection provide: the objection, an empathetic acknowledgement, the reframe,
supporting evidence, and a closing question to regain momentum.
Cover at least 8 objections relevant to the brief. Tone: {{tone}}.
Brief / product/service context: {{brief}}
Context: {{context}}";

const PROPOSAL_DRAFT: &str = "Write a full client proposal / scope of work document.
Structure:
1. Executive Summary
2. Understanding of the Brief
3. Proposed Solution / Approach
4. Deliverables & Timeline
5. Investment (use [PRICE] placeholder for client to fill)
6. Team / Why Us
7. Next Steps
Professional, client-ready tone. Length: 600-900 words.
Brief: {{brief}}
Context: {{context}}";

const CRM_ENRICHMENT: &str = "Enrich the following CRM record with research-based data.
Provide: full company profile, estimated employee count, industry code (SIC), tech stack signals,
LinkedIn company page URL format, estimated annual revenue band, and 3 tailored notes a sales rep
should know before calling. Format as clean JSON + plain text summary.
Record: {{brief}}
Context: {{context}}";

pub fn company() -> Company {
    Company {
        id: CompanyId::SalesTeam,
        name: "The Sales Team",
        tagline: "Prospects researched. Pipelines filled.",
        description: "AI-powered B2B sales support. Prospect research, personalised outreach, \
            pitch decks, competitive analysis, objection-handling scripts, and \
            full follow-up sequences.",
        phase: 1,
        icon: "🎯",
        colour: "#22C55E",
        price_from: "£0.70 / job",
        system_prompt: SYSTEM_PROMPT,
        default_tone: "professional",
        tone_suffixes: &[],
        jobs: vec![
            JobTemplate::new("prospect_research", "Prospect Research", "~60s", PROSPECT_RESEARCH),
            JobTemplate::new("cold_outreach_email", "Cold Outreach Email", "~45s", COLD_OUTREACH_EMAIL),
            JobTemplate::new("followup_sequence", "Follow-Up Sequence (5 emails)", "~75s", FOLLOWUP_SEQUENCE),
            JobTemplate::new("pitch_deck_outline", "Pitch Deck Outline", "~60s", PITCH_DECK_OUTLINE),
            JobTemplate::new("competitive_analysis", "Competitive Analysis", "~75s", COMPETITIVE_ANALYSIS),
            JobTemplate::new("objection_handler", "Objection-Handling Script", "~45s", OBJECTION_HANDLER),
            JobTemplate::new("proposal_draft", "Proposal / Scope of Work", "~90s", PROPOSAL_DRAFT),
            JobTemplate::new("crm_enrichment", "CRM Data Enrichment", "~45s", CRM_ENRICHMENT),
        ],
    }
}
