use staff_hire_core::{
    desk::{Notice, RecruitmentDesk},
    error::Result,
    form::FormField,
};
use tracing_subscriber::EnvFilter;

fn show(action: &str, notice: &Notice) {
    println!("[{}] {}: {}", action, notice.title(), notice.message());
}

/// Walks a desk through a short session: hire one full-time and one
/// part-time staff member, give the full-timer a raise, move the part-timer
/// to the evening shift, then let them go.
fn session() -> Result<RecruitmentDesk> {
    let mut desk = RecruitmentDesk::new()?;

    let form = desk.form_mut();
    form.enter(FormField::VacancyNumber, "101");
    form.enter(FormField::Designation, "Head lecturer");
    form.enter(FormField::JobType, "Lecturer");
    form.enter(FormField::StaffName, "Lisa Rinna");
    form.enter(FormField::JoiningDate, "01/09/2024");
    form.enter(FormField::Qualification, "PHD");
    form.enter(FormField::AppointedBy, "Head of School");
    form.enter(FormField::Salary, "25000.00");
    form.enter(FormField::WeeklyFractionalHours, "10");
    form.set_joined(true);
    show("add full time", &desk.add_full_time_staff());

    let form = desk.form_mut();
    form.enter(FormField::VacancyNumber, "200");
    form.enter(FormField::Designation, "Lab assistant");
    form.enter(FormField::JobType, "Mentor");
    form.enter(FormField::StaffName, "Kyle Richards");
    form.enter(FormField::JoiningDate, "15/01/2025");
    form.enter(FormField::Qualification, "Masters");
    form.enter(FormField::AppointedBy, "Head of Lab");
    form.enter(FormField::WorkingHours, "20");
    form.enter(FormField::WagesPerHour, "13.82");
    form.enter(FormField::Shift, "Morning");
    form.set_joined(true);
    show("add part time", &desk.add_part_time_staff());

    desk.form_mut().enter(FormField::VacancyNumber, "101");
    desk.form_mut().enter(FormField::Salary, "27500");
    show("set salary", &desk.set_salary());

    desk.form_mut().enter(FormField::VacancyNumber, "200");
    desk.form_mut().enter(FormField::Shift, "Evening");
    show("set shifts", &desk.set_shifts());
    show("terminate", &desk.terminate_staff());
    show("terminate again", &desk.terminate_staff());

    desk.form_mut().enter(FormField::DisplayNumber, "1");
    show("display", &desk.display_staff());
    Ok(desk)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let desk = session()?;
    println!("{:<6} {:<10} {:<16} {:<16} {:<10} {}", "Index", "Vacancy #", "Staff Name", "Designation", "Job Type", "Status");
    for row in desk.rows() {
        println!("{:<6} {:<10} {:<16} {:<16} {:<10} {}", row.index(), row.vacancy_number().to_string(), row.staff_name(), row.designation(), row.job_type(), row.status());
    }
    Ok(())
}
