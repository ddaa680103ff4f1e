use crate::cli::{CartCommand, Command, DiagnoseArgs, ProfileCommand};
use crate::render;
use catalog_service::{Catalog, Category};
use diagnosis_service::{body_part_of, canonical_body_part, canonical_symptom, FormResult, SymptomForm, SymptomReport};
use std::process::ExitCode;
use storefront::{Action, ProfileUpdate, Storefront, StorefrontResult};

/// Run one page and print its outcome. Failures are reported inline and
/// turn into a non-zero exit code.
pub async fn run(shop: &mut Storefront, command: Command) -> ExitCode {
    let action = action_for(&command);
    match dispatch(shop, command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let message = shop.report(action, &err);
            render::failure(&message);
            ExitCode::FAILURE
        }
    }
}

fn action_for(command: &Command) -> Action {
    match command {
        Command::Home | Command::Medicines { .. } | Command::Medicine { .. } => Action::LoadMedicines,
        Command::Diagnose(_) => Action::AnalyzeSymptoms,
        Command::Cart { .. } => Action::UpdateCart,
        Command::Checkout { .. } | Command::Orders => Action::PlaceOrder,
        Command::Profile { .. } => Action::UpdateProfile,
    }
}

async fn dispatch(shop: &mut Storefront, command: Command) -> StorefrontResult<()> {
    match command {
        Command::Home => {
            let state = shop.state();
            render::home(Catalog::new().categories(), state.cart(), state.orders());
        }
        Command::Medicines { search, category } => {
            let category = category.as_deref().map(str::parse::<Category>).transpose()?;
            let medicines = shop.medicines(search.as_deref().unwrap_or_default(), category).await?;
            render::medicine_list(&medicines);
        }
        Command::Medicine { id } => {
            let medicine = shop.medicine(&id).await?;
            render::medicine_detail(&medicine);
            let in_cart = shop.state().cart().quantity_of(&medicine.id);
            if in_cart > 0 {
                render::note(&format!("{} in your cart", in_cart));
            }
        }
        Command::Diagnose(args) => diagnose(shop, &args).await?,
        Command::Cart { action } => cart(shop, action.unwrap_or(CartCommand::Show)).await?,
        Command::Checkout { address, payment } => {
            let address = address
                .or_else(|| shop.state().user().map(|user| user.address.clone()))
                .unwrap_or_default();
            let order = shop.checkout(&address, payment.into()).await?;
            render::success("Order placed");
            render::order(&order);
        }
        Command::Profile { action } => match action.unwrap_or(ProfileCommand::Show) {
            ProfileCommand::Show => match shop.state().user() {
                Some(user) => render::profile(user),
                None => render::note("Not signed in"),
            },
            ProfileCommand::Update { name, email, phone, address } => {
                let update = ProfileUpdate { name, email, phone, address };
                if shop.update_profile(update).await? {
                    render::success("Profile updated");
                } else {
                    render::note("Nothing to update");
                }
            }
        },
        Command::Orders => render::orders(shop.state().orders()),
    }
    Ok(())
}

async fn diagnose(shop: &mut Storefront, args: &DiagnoseArgs) -> StorefrontResult<()> {
    let report = build_report(args)?;
    let result = shop.diagnose(&report).await?;
    render::diagnosis(&result);

    if args.add_to_cart {
        let added = shop.add_recommended_to_cart().await?;
        render::success(&format!("Added {} medicine(s) to your cart", added));
    } else {
        render::note("Run again with --add-to-cart to add the recommendations to your cart");
    }
    Ok(())
}

async fn cart(shop: &mut Storefront, command: CartCommand) -> StorefrontResult<()> {
    match command {
        CartCommand::Show => {}
        CartCommand::Add { id, quantity } => {
            shop.add_to_cart(&id, quantity).await?;
            render::success(&format!("{} now × {}", id, shop.state().cart().quantity_of(&id)));
        }
        CartCommand::Remove { id } => {
            if shop.remove_from_cart(&id).await? {
                render::success(&format!("Removed {}", id));
            } else {
                render::note(&format!("{} is not in your cart", id));
            }
        }
        CartCommand::Set { id, quantity } => {
            shop.update_cart_item_quantity(&id, quantity).await?;
        }
        CartCommand::Clear => {
            shop.clear_cart().await?;
            render::success("Cart cleared");
        }
    }

    let state = shop.state();
    render::cart(state.cart(), &state.cart_totals());
    Ok(())
}

/// Fill the symptom form from command-line flags. Labels are matched without
/// regard to case; body parts default to those owning the given symptoms.
fn build_report(args: &DiagnoseArgs) -> FormResult<SymptomReport> {
    let symptoms: Vec<&str> = unique(
        args.symptoms
            .iter()
            .map(|raw| canonical_symptom(raw).unwrap_or(raw.as_str())),
    );

    let body_parts: Vec<&str> = if args.body_parts.is_empty() {
        unique(symptoms.iter().filter_map(|symptom| body_part_of(symptom)))
    } else {
        unique(
            args.body_parts
                .iter()
                .map(|raw| canonical_body_part(raw).unwrap_or(raw.as_str())),
        )
    };

    let mut form = SymptomForm::new();
    for part in body_parts {
        form.toggle_body_part(part)?;
    }
    for symptom in symptoms {
        form.toggle_symptom(symptom)?;
    }
    if let Some(duration) = &args.duration {
        form.set_duration(duration)?;
    }
    if let Some(severity) = &args.severity {
        form.set_severity(severity)?;
    }
    if let Some(notes) = &args.notes {
        form.set_notes(notes.as_str());
    }
    form.submit()
}

fn unique<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = Vec::new();
    for label in labels {
        if !seen.contains(&label) {
            seen.push(label);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use diagnosis_service::DiagnosisError;

    fn args(symptoms: &[&str], duration: Option<&str>, severity: Option<&str>) -> DiagnoseArgs {
        DiagnoseArgs {
            symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
            duration: duration.map(str::to_string),
            severity: severity.map(str::to_string),
            ..DiagnoseArgs::default()
        }
    }

    #[test]
    fn test_body_parts_inferred() {
        let report = build_report(&args(&["fever", "Cough", "FEVER"], Some("1-3 days"), Some("severe"))).unwrap();
        assert_eq!(report.symptoms.len(), 2);
        assert!(report.has_symptom("Fever"));
        assert!(report.has_symptom("Cough"));
        assert!(report.is_severe());
    }

    #[test]
    fn test_missing_fields_use_form_messages() {
        assert_eq!(build_report(&args(&[], None, None)), Err(DiagnosisError::NoBodyPart));
        assert_eq!(
            build_report(&args(&["Nausea"], None, Some("Mild"))),
            Err(DiagnosisError::MissingDuration)
        );
        assert_eq!(
            build_report(&args(&["Nausea"], Some("1-3 days"), None)),
            Err(DiagnosisError::MissingSeverity)
        );
    }

    #[test]
    fn test_explicit_body_part_without_symptom() {
        let input = DiagnoseArgs {
            body_parts: vec!["head".to_string()],
            ..DiagnoseArgs::default()
        };
        assert_eq!(build_report(&input), Err(DiagnosisError::NoSymptom));
    }

    #[test]
    fn test_unknown_symptom_rejected() {
        let err = build_report(&args(&["Hiccups"], Some("1-3 days"), Some("Mild"))).unwrap_err();
        assert!(matches!(err, DiagnosisError::UnknownOption { field: "symptom", .. }));
    }
}
