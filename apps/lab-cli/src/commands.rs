//! Subcommand handlers.
//!
//! Each handler builds its domain values, calls lab-core, and returns a
//! serializable report. Printing happens in one place, [`Report::print`].

use anyhow::Result;
use serde::Serialize;
use tracing::info;

use lab_core::checkout::{processor_for, CheckoutService, EmailNotifier};
use lab_core::pricing::{quote, PriceQuote};
use lab_core::validation::{validate_customer_name, validate_order_total, validated_student};
use lab_core::{Order, OrderStatus, PaymentMethod, RegistrationOutcome, RegistrationService, Student};

use crate::cli::Command;
use crate::config::LabConfig;

/// What a subcommand produced.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    Registration {
        nim: String,
        #[serde(flatten)]
        outcome: RegistrationOutcome,
    },
    Quote(PriceQuote),
    Checkout {
        order_id: String,
        customer: String,
        method: PaymentMethod,
        status: OrderStatus,
        succeeded: bool,
    },
    Demo {
        reports: Vec<Report>,
    },
}

impl Report {
    /// `false` for rejected registrations and failed checkouts.
    pub fn succeeded(&self) -> bool {
        match self {
            Report::Registration { outcome, .. } => outcome.is_accepted(),
            Report::Quote(_) => true,
            Report::Checkout { succeeded, .. } => *succeeded,
            // Demo includes intentional rejections.
            Report::Demo { .. } => true,
        }
    }

    pub fn print(&self, json: bool) -> Result<()> {
        if json {
            println!("{}", serde_json::to_string_pretty(self)?);
        } else {
            println!("{}", self.render());
        }
        Ok(())
    }

    fn render(&self) -> String {
        match self {
            Report::Registration { nim, outcome } => match outcome.rejected_by() {
                None => format!("{nim}: accepted"),
                Some(rule) => format!("{nim}: rejected by {rule}"),
            },
            Report::Quote(q) => format!(
                "base {:.2} | discount {:.2}% | discounted {:.2} | tax {:.2} | final {:.2}",
                q.base_price, q.discount_percent, q.discounted_price, q.tax, q.final_price
            ),
            Report::Checkout {
                order_id,
                customer,
                method,
                status,
                ..
            } => format!("order {order_id} for {customer} via {method}: {status:?}"),
            Report::Demo { reports } => reports
                .iter()
                .map(Report::render)
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

pub fn run(command: Command, config: &LabConfig) -> Result<Report> {
    match command {
        Command::Register {
            nim,
            sks,
            no_prerequisite,
        } => {
            let student = validated_student(&nim, sks, !no_prerequisite)?;
            Ok(register(config, &student))
        }
        Command::Price { base, discount } => Ok(Report::Quote(quote(base, discount))),
        Command::Checkout {
            customer,
            total,
            method,
        } => {
            validate_customer_name(&customer)?;
            let total = validate_order_total(total)?;
            let method: PaymentMethod = method.parse()?;
            let mut order = Order::new(customer.trim(), total);
            Ok(checkout(method, &mut order))
        }
        Command::Demo => Ok(demo(config)),
    }
}

fn register(config: &LabConfig, student: &Student) -> Report {
    let service = RegistrationService::new(config.registration_rules());
    Report::Registration {
        nim: student.nim().to_string(),
        outcome: service.evaluate(student),
    }
}

fn checkout(method: PaymentMethod, order: &mut Order) -> Report {
    let service = CheckoutService::new(processor_for(method), Box::new(EmailNotifier));
    let succeeded = service.run_checkout(order);
    Report::Checkout {
        order_id: order.id.clone(),
        customer: order.customer_name.clone(),
        method,
        status: order.status(),
        succeeded,
    }
}

/// Three students, two orders, two quotes.
fn demo(config: &LabConfig) -> Report {
    let mut reports = Vec::new();

    info!("Scenario 1: registration intake");
    for student in [
        Student::new_eligible("24111", 26),
        Student::new("0244", 20, false),
        Student::new_eligible("1049", 23),
    ] {
        reports.push(register(config, &student));
    }

    info!("Scenario 2: checkout with card, then QRIS");
    let mut andi = Order::new("Andi", lab_core::Money::from_major_minor(500_000, 0));
    reports.push(checkout(PaymentMethod::CreditCard, &mut andi));
    let mut budi = Order::new("Budi", lab_core::Money::from_major_minor(100_000, 0));
    reports.push(checkout(PaymentMethod::Qris, &mut budi));

    info!("Scenario 3: discount quotes");
    reports.push(Report::Quote(quote(999.0, 33.0)));
    reports.push(Report::Quote(quote(0.0, 10.0)));

    Report::Demo { reports }
}
