//! Product requirements page shown in the documentation view.

use leptos::prelude::*;

#[component]
fn SectionHeader(title: &'static str) -> impl IntoView {
	view! { <h2 class="doc__section-header">{title}</h2> }
}

#[component]
fn SubHeader(title: &'static str) -> impl IntoView {
	view! { <h3 class="doc__sub-header">{title}</h3> }
}

#[component]
fn InfoRow(label: &'static str, value: &'static str) -> impl IntoView {
	view! {
		<div class="doc__info-row">
			<div class="doc__info-label">{label}</div>
			<div class="doc__info-value">{value}</div>
		</div>
	}
}

fn bullets(items: &'static [&'static str]) -> impl IntoView + use<> {
	let items = items.iter().map(|item| view! { <li>{*item}</li> }).collect_view();
	view! { <ul class="doc__list">{items}</ul> }
}

struct Metric {
	name: &'static str,
	baseline: &'static str,
	target: &'static str,
	latest: &'static str,
}

const METRICS: [Metric; 3] = [
	Metric {
		name: "Asset Loss Rate",
		baseline: "12%",
		target: "< 5%",
		latest: "10.5%",
	},
	Metric {
		name: "Audit Completion Time",
		baseline: "14 Days",
		target: "3 Days",
		latest: "On Track",
	},
	Metric {
		name: "System Adoption",
		baseline: "0 Users",
		target: "250 Active Users",
		latest: "45 Beta Users",
	},
];

const PHASES: [&str; 4] = ["Problem Space", "Solution Space", "Observing", "Archived"];
const STAGES: [&str; 4] = ["Discover", "Define", "Explore", "Deliver"];
const MILESTONES: [&str; 3] = ["Product Spec", "Design Exploration", "Epic / Issues"];

const TEAM: [(&str, &str); 5] = [
	("Product Management", "Ankur Madan"),
	("Product Design", "Ankur Madan"),
	("User Research", "Market Research Team"),
	("Analytics", "DataOps Team"),
	("Engineering", "Frontend: React Team, Backend: Node Team"),
];

const INSIGHTS: [&str; 3] = [
	"Field technicians spend 15% of their weekly time manually searching for tools.",
	"Barcode scanning is preferred over RFID due to lower infrastructure costs.",
	"Competitor analysis of \"TrackItAll\" shows a gap in seamless mobile-to-desktop handoff.",
];

const CONSTRAINTS: [&str; 3] = [
	"Must support offline mode for warehouses with poor connectivity.",
	"Must integrate with existing legacy ERP (SAP) via nightly batch CSV.",
	"Deadline: Beta release by August 1st.",
];

const EXCLUDED: [&str; 2] = [
	"Vehicle fleet tracking (out of scope for MVP).",
	"Automated procurement ordering (planned for v3.0).",
];

const IDEAS: [(&str, &str); 2] = [
	("QR Code Stickers", "Pre-print rolls of QR codes for rapid tagging of legacy assets."),
	("GPS Geofencing", "Alerts when high-value items leave the campus perimeter."),
];

#[derive(Clone, Copy)]
enum Importance {
	MustHave,
	NiceToHave,
}

impl Importance {
	fn label(self) -> &'static str {
		match self {
			Importance::MustHave => "Must have",
			Importance::NiceToHave => "Nice to have",
		}
	}

	fn class(self) -> &'static str {
		match self {
			Importance::MustHave => "pill pill--must",
			Importance::NiceToHave => "pill pill--nice",
		}
	}
}

struct Story {
	role: &'static str,
	want: &'static str,
	benefit: &'static str,
	importance: Importance,
}

const STORIES: [Story; 2] = [
	Story {
		role: "Warehouse Manager",
		want: "scan items in bulk",
		benefit: "I can finish audits faster",
		importance: Importance::MustHave,
	},
	Story {
		role: "IT Admin",
		want: "see warranty status",
		benefit: "I know when to replace laptops",
		importance: Importance::NiceToHave,
	},
];

/// Static product requirements document.
///
/// `on_open_board` fires when the design-board link is clicked.
#[component]
pub fn Documentation(#[prop(into)] on_open_board: Callback<()>) -> impl IntoView {
	let metric_rows = METRICS
		.iter()
		.map(|m| {
			view! {
				<tr>
					<td>{m.name}</td>
					<td class="muted">{m.baseline}</td>
					<td class="doc__target">{m.target}</td>
					<td>{m.latest}</td>
				</tr>
			}
		})
		.collect_view();

	let phase_cells = PHASES.iter().map(|p| view! { <div>{*p}</div> }).collect_view();
	let stage_cells = STAGES.iter().map(|s| view! { <div>{*s}</div> }).collect_view();
	let milestone_cells = MILESTONES
		.iter()
		.map(|m| view! { <div class="muted">{*m}</div> })
		.collect_view();

	let team_rows = TEAM
		.iter()
		.map(|(label, value)| view! { <InfoRow label={*label} value={*value} /> })
		.collect_view();

	let idea_rows = IDEAS
		.iter()
		.map(|(idea, description)| {
			view! {
				<tr>
					<td class="doc__strong">{*idea}</td>
					<td class="muted">{*description}</td>
				</tr>
			}
		})
		.collect_view();

	let story_rows = STORIES
		.iter()
		.map(|s| {
			view! {
				<tr>
					<td>
						"As a " <b>{s.role}</b> ", I want to " <b>{s.want}</b> ", so that "
						<b>{s.benefit}</b> "."
					</td>
					<td>
						<span class=s.importance.class()>{s.importance.label()}</span>
					</td>
				</tr>
			}
		})
		.collect_view();

	view! {
		<div class="doc">
			<div class="doc__header">
				<div class="doc__template-tag">
					<h1>"PRD Template"</h1>
				</div>
				<h1 class="doc__title">"Asset Manager - Enterprise Inventory Control"</h1>
				<p class="muted">
					"Direct questions to: " <span class="doc__handle">"@ankur.madan"</span> " or "
					<span class="doc__handle">"#proj-assetmanager"</span>
				</p>
				<p class="muted">"Last updated: " <b>"May 15, 2024"</b></p>

				<SubHeader title="What" />
				<p>
					"A cross-platform (Mobile & Desktop) asset lifecycle management system designed to streamline \
					 inventory tracking, reduce equipment loss, and provide real-time analytics for enterprise IT and \
					 operations teams."
				</p>
				<SubHeader title="Why" />
				<p>
					"Current spreadsheet-based solutions are error-prone and lack real-time visibility, leading to a \
					 12% annual asset loss rate. This initiative aligns with the company's Q3 Operational Efficiency \
					 goal to reduce overhead costs by automating manual tracking workflows."
				</p>
			</div>

			<div class="doc__band">
				<SectionHeader title="Success Criteria" />
				<p class="muted">"What does success look like? Include quant and qual metrics as appropriate."</p>
				<div class="doc__table-wrap">
					<table class="doc__table">
						<thead>
							<tr>
								<th>"Metric"</th>
								<th>"Baseline (Q1 2024)"</th>
								<th>"Target (Q4 2024)"</th>
								<th>"Latest (May 15)"</th>
							</tr>
						</thead>
						<tbody>{metric_rows}</tbody>
					</table>
				</div>
			</div>

			<div class="doc__body">
				<section>
					<SectionHeader title="[Optional] Overview" />
					<div class="phase-grid">
						<div class="phase-grid__row phase-grid__row--head">{phase_cells}</div>
						<div class="phase-grid__row">{stage_cells}</div>
						<div class="phase-grid__row">
							<div class="phase-grid__here">"📍 We are here"</div>
							{milestone_cells}
						</div>
					</div>
					<SubHeader title="Team" />
					<div class="doc__panel">{team_rows}</div>
				</section>

				<section>
					<SectionHeader title="Product Spec" />
					<p class="doc__lede">
						"This section gives us a consistent way of making sure we’re working on the right problems \
						 before diving into solutions."
					</p>
					<SubHeader title="Alignment" />
					<p>
						"This initiative directly ties to the broader \"Digital Transformation 2.0\" company strategy, \
						 specifically the pillar regarding automation of manual back-office processes."
					</p>
					<SubHeader title="Key Insights and Inspiration" />
					<p>"During Q1 field research, we observed that:"</p>
					{bullets(&INSIGHTS)}
					<SubHeader title="Problem Statement" />
					<p class="doc__callout">
						<b>"The Underlying Problem:"</b>
						" Equipment visibility is siloed. We know this is true because physical audits consistently \
						 show a variance of > 10% against the central ledger, and support tickets for \"lost item \
						 replacement\" have increased 20% YoY."
					</p>
					<SubHeader title="Hypothesis & Impact" />
					<p>
						"We believe " <b>"implementing a unified mobile scanning workflow"</b> " will lead to "
						<b>"accurate real-time inventory data"</b> ", which will result in "
						<b>"reducing asset loss to under 5%"</b> " by " <b>"Q4 2024"</b> "."
					</p>
					<SubHeader title="Constraints" />
					{bullets(&CONSTRAINTS)}
					<SubHeader title="Non-Goals" />
					<p>"Are there any related problems that we want to explicitly ignore for now?"</p>
					{bullets(&EXCLUDED)}
				</section>

				<section>
					<SectionHeader title="Design Exploration" />
					<p class="doc__lede">"This section helps us ensure a collaborative and divergent design process."</p>
					<button class="doc__link" on:click=move |_| on_open_board.run(())>
						<span aria-hidden="true">"🔗"</span>
						" Link to Figma Board"
					</button>

					<SubHeader title="Initial Ideas" />
					<table class="doc__table">
						<thead>
							<tr>
								<th>"Ideas"</th>
								<th>"Description"</th>
							</tr>
						</thead>
						<tbody>{idea_rows}</tbody>
					</table>

					<SubHeader title="User Stories" />
					<table class="doc__table">
						<thead>
							<tr>
								<th>"User Stories"</th>
								<th>"Importance"</th>
							</tr>
						</thead>
						<tbody>{story_rows}</tbody>
					</table>

					<SubHeader title="Explored Directions" />
					<div class="grid-2">
						<div class="direction">
							<h4>"Direction A: \"Mobile First\""</h4>
							<p class="muted">
								"Focus purely on the mobile scanner app, leaving admin tasks to the legacy system."
							</p>
							<span class="direction__verdict direction__verdict--discarded">
								"Discarded due to legacy API limits."
							</span>
						</div>
						<div class="direction direction--selected">
							<h4>"Direction B: \"Hybrid Suite\""</h4>
							<p class="muted">
								"A balanced approach with a React Native scanner and a React admin dashboard."
							</p>
							<span class="direction__verdict">"Selected Direction."</span>
						</div>
					</div>

					<SubHeader title="Key Decisions" />
					<ul class="doc__list">
						<li><b>"Auth Provider:"</b> " Decided to use Auth0 for SSO integration ease."</li>
						<li>
							<b>"Database:"</b>
							" PostgreSQL chosen over NoSQL for strict schema relation requirements in asset assignment."
						</li>
					</ul>
				</section>
			</div>
		</div>
	}
}
