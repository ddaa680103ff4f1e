// Terminal output for each page

use catalog_service::{Category, MedicineRecord};
use colored::*;
use diagnosis_service::{DiagnosisResult, Severity};
use order_service::{Cart, OrderHistory, OrderRecord, Totals};
use rust_decimal::Decimal;
use storefront::UserProfile;

pub fn money(amount: Decimal) -> String {
    format!("${:.2}", amount)
}

pub fn heading(title: &str) {
    println!("\n{}", title.bright_cyan().bold());
}

pub fn success(message: &str) {
    println!("{} {}", "✔".bright_green(), message);
}

pub fn note(message: &str) {
    println!("{}", message.bright_black());
}

pub fn failure(message: &str) {
    eprintln!("{} {}", "✘".bright_red(), message.red());
}

pub fn home(categories: &[Category], cart: &Cart, orders: &OrderHistory) {
    heading("MediCart: your online pharmacy");
    println!("Describe your symptoms with {} or browse {}.", "medicart diagnose".bright_yellow(), "medicart medicines".bright_yellow());

    heading("Categories");
    for category in categories {
        println!("  • {}", category);
    }

    heading("Cart");
    if cart.is_empty() {
        note("  Your cart is empty");
    } else {
        println!("  {} item(s), subtotal {}", cart.item_count(), money(cart.subtotal()));
    }

    if let Some(order) = orders.latest() {
        heading("Latest order");
        order_summary(order);
    }
}

pub fn medicine_list(medicines: &[MedicineRecord]) {
    if medicines.is_empty() {
        note("No medicines found");
        return;
    }
    for medicine in medicines {
        medicine_row(medicine);
    }
    note(&format!("{} medicine(s)", medicines.len()));
}

pub fn medicine_row(medicine: &MedicineRecord) {
    let stock = if medicine.in_stock() {
        format!("{} in stock", medicine.stock).green()
    } else {
        "out of stock".red()
    };
    println!(
        "{:<8} {:<28} {:>8}  {:<17} {}",
        medicine.id.bright_white(),
        medicine.name,
        money(medicine.price).bright_yellow(),
        medicine.category.to_string(),
        stock
    );
}

pub fn medicine_detail(medicine: &MedicineRecord) {
    heading(&medicine.name);
    println!("{}", medicine.description);
    println!("{} {}", "Price:".bold(), money(medicine.price).bright_yellow());
    println!("{} {}", "Dosage:".bold(), medicine.dosage);
    println!("{} {}", "Category:".bold(), medicine.category);
    println!("{} {}", "Stock:".bold(), medicine.stock);
    if medicine.requires_prescription {
        println!("{}", "Prescription required".bright_red());
    }
    println!("\n{}\n  {}", "How to use".bold(), medicine.usage_instructions);
    println!("{}\n  {}", "Side effects".bold(), medicine.side_effects);
}

pub fn diagnosis(result: &DiagnosisResult) {
    let severity = match result.severity {
        Severity::Mild => result.severity.to_string().green(),
        Severity::Moderate => result.severity.to_string().yellow(),
        Severity::Severe => result.severity.to_string().red(),
    };
    heading(&result.condition);
    println!("{} {}   {} {}%", "Severity:".bold(), severity, "Confidence:".bold(), result.confidence);
    println!("{}", result.description);
    println!("\n{}\n  {}", "Advice".bold(), result.advice);
    if result.see_doctor {
        println!("\n{}", "Please consult a doctor about these symptoms.".bright_red().bold());
    }

    heading("Recommended medicines");
    for medicine in &result.recommended_medicines {
        medicine_row(medicine);
    }
}

pub fn cart(cart: &Cart, totals: &Totals) {
    heading("Your cart");
    if cart.is_empty() {
        note("Your cart is empty");
        return;
    }
    for line in cart.lines() {
        println!(
            "{:<8} {:<28} {:>3} × {:>8} = {:>9}",
            line.medicine.id.bright_white(),
            line.medicine.name,
            line.quantity,
            money(line.medicine.price),
            money(line.line_total())
        );
    }
    println!();
    println!("{:>52} {:>9}", "Subtotal", money(totals.subtotal));
    let fee = if totals.delivery_fee.is_zero() {
        "FREE".green().to_string()
    } else {
        money(totals.delivery_fee)
    };
    println!("{:>52} {:>9}", "Delivery", fee);
    println!("{:>52} {:>9}", "Total".bold(), money(totals.total).bright_yellow().bold());
}

pub fn order_summary(order: &OrderRecord) {
    println!(
        "  {}  {}  {} item(s)  {}  {}",
        order.id.bright_white(),
        order.created_at.format("%Y-%m-%d %H:%M"),
        order.item_count(),
        money(order.total_amount).bright_yellow(),
        order.status.to_string().green()
    );
}

pub fn order(order: &OrderRecord) {
    heading(&format!("Order {}", order.id));
    for line in &order.items {
        println!("  {} × {}", line.quantity, line.medicine.name);
    }
    println!("{} {}", "Total:".bold(), money(order.total_amount).bright_yellow());
    println!("{} {}", "Payment:".bold(), order.payment_method);
    println!("{} {}", "Deliver to:".bold(), order.delivery_address);
    println!("{} {}", "Status:".bold(), order.status.to_string().green());
}

pub fn orders(history: &OrderHistory) {
    heading("Your orders");
    if history.is_empty() {
        note("You have not placed any orders yet");
        return;
    }
    for order in history.list().iter().rev() {
        order_summary(order);
    }
}

pub fn profile(user: &UserProfile) {
    heading("My profile");
    println!("{} {}", "Name:".bold(), user.name);
    println!("{} {}", "Email:".bold(), user.email);
    println!("{} {}", "Phone:".bold(), user.phone);
    println!("{} {}", "Address:".bold(), user.address);

    heading("Medical history");
    if user.medical_history.is_empty() {
        note("No diagnoses yet");
    }
    for record in &user.medical_history {
        println!(
            "  {}  {}  ({})",
            record.date.format("%Y-%m-%d"),
            record.diagnosis.bright_white(),
            record.symptoms.join(", ")
        );
    }
}
