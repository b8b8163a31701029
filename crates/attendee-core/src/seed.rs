//! The built-in people fixture the prototype form searches against.
//!
//! The purchaser record comes first; directory order is the order below.

use crate::person::{EmployeeType, PURCHASER_ID, Person};

/// `(id, full name, job title, email, department, location, manager, tenure)`
type SeedRow = (
  &'static str,
  &'static str,
  &'static str,
  &'static str,
  &'static str,
  &'static str,
  &'static str,
  &'static str,
);

const STAFF: &[SeedRow] = &[
  ("1", "Jordan Alvarez", "Senior Product Manager", "jordan.alvarez@company.com", "Product", "New York", "Alex Chen", "3 years, 2 months"),
  ("2", "Alexandra Chen", "Lead Software Engineer", "alexandra.chen@company.com", "Engineering", "Seattle", "David Kim", "5 years, 3 months"),
  ("3", "Marcus Thompson", "UX Designer", "marcus.thompson@company.com", "Design", "Austin", "Olivia Martinez", "2 years, 8 months"),
  ("4", "Sofia Rodriguez", "Data Scientist", "sofia.rodriguez@company.com", "Data", "Boston", "Alexandra Chen", "1 year, 7 months"),
  ("5", "David Kim", "Marketing Director", "david.kim@company.com", "Marketing", "Los Angeles", "Ava Wilson", "6 years, 4 months"),
  ("6", "Emily Watson", "Senior Frontend Developer", "emily.watson@company.com", "Engineering", "Seattle", "David Kim", "4 years, 9 months"),
  ("7", "James Mitchell", "DevOps Engineer", "james.mitchell@company.com", "Engineering", "San Francisco", "Alexandra Chen", "2 years, 1 month"),
  ("8", "Olivia Martinez", "Product Designer", "olivia.martinez@company.com", "Design", "Austin", "Harper Walker", "3 years, 11 months"),
  ("9", "Ryan Foster", "Backend Engineer", "ryan.foster@company.com", "Engineering", "New York", "David Kim", "1 year, 4 months"),
  ("10", "Isabella Garcia", "Content Strategist", "isabella.garcia@company.com", "Marketing", "Chicago", "David Kim", "2 years, 6 months"),
  ("11", "Michael Brown", "QA Engineer", "michael.brown@company.com", "Engineering", "Seattle", "Alexandra Chen", "3 years, 3 months"),
  ("12", "Charlotte Lee", "Business Analyst", "charlotte.lee@company.com", "Product", "Denver", "Jordan Alvarez", "1 year, 9 months"),
  ("13", "Daniel White", "Sales Manager", "daniel.white@company.com", "Sales", "Phoenix", "Mia Johnson", "5 years, 7 months"),
  ("14", "Amelia Taylor", "HR Specialist", "amelia.taylor@company.com", "HR", "Portland", "Emma Clark", "2 years, 2 months"),
  ("15", "Lucas Anderson", "Security Engineer", "lucas.anderson@company.com", "Engineering", "San Francisco", "Alexandra Chen", "4 years, 5 months"),
  ("16", "Mia Johnson", "Customer Success Manager", "mia.johnson@company.com", "Customer Success", "Miami", "Daniel White", "6 years, 8 months"),
  ("17", "Ethan Davis", "Mobile Developer", "ethan.davis@company.com", "Engineering", "Austin", "David Kim", "1 year, 11 months"),
  ("18", "Ava Wilson", "Product Marketing Manager", "ava.wilson@company.com", "Marketing", "New York", "David Kim", "7 years, 2 months"),
  ("19", "Noah Moore", "Technical Writer", "noah.moore@company.com", "Engineering", "Seattle", "Alexandra Chen", "2 years, 10 months"),
  ("20", "Sophia Jackson", "Finance Analyst", "sophia.jackson@company.com", "Finance", "San Francisco", "Emma Clark", "3 years, 6 months"),
  ("21", "Liam Harris", "Full Stack Developer", "liam.harris@company.com", "Engineering", "Boston", "David Kim", "1 year, 2 months"),
  ("22", "Emma Clark", "Operations Manager", "emma.clark@company.com", "Operations", "San Francisco", "Gang Wang", "9 years, 3 months"),
  ("23", "Oliver Lewis", "Growth Hacker", "oliver.lewis@company.com", "Marketing", "Los Angeles", "David Kim", "2 years, 4 months"),
  ("24", "Harper Walker", "UI Designer", "harper.walker@company.com", "Design", "Austin", "Olivia Martinez", "4 years, 2 months"),
  ("25", "Aiden Hall", "Site Reliability Engineer", "aiden.hall@company.com", "Engineering", "Seattle", "Alexandra Chen", "3 years, 8 months"),
  ("26", "Evelyn Young", "Research Scientist", "evelyn.young@company.com", "Research", "Boston", "Sofia Rodriguez", "5 years, 1 month"),
  ("27", "Carter King", "Product Owner", "carter.king@company.com", "Product", "New York", "Jordan Alvarez", "2 years, 7 months"),
  ("28", "Luna Wright", "Brand Designer", "luna.wright@company.com", "Design", "Portland", "Olivia Martinez", "1 year, 6 months"),
  ("29", "Mason Lopez", "Cloud Architect", "mason.lopez@company.com", "Engineering", "San Francisco", "Alexandra Chen", "6 years, 9 months"),
  ("30", "Zoe Hill", "Community Manager", "zoe.hill@company.com", "Marketing", "Chicago", "David Kim", "1 year, 8 months"),
];

/// The default payer shown on every new expense.
pub fn purchaser() -> Person {
  Person {
    is_purchaser: true,
    ..row_to_person(&(
      PURCHASER_ID,
      "Lando Norris",
      "5% Machine 95% Results",
      "sriram@rippling.com",
      "Product Marketing",
      "San Francisco",
      "Gang Wang",
      "8 years, 1 month",
    ))
  }
}

/// The full seed roster: purchaser first, then staff in id order.
pub fn default_people() -> Vec<Person> {
  std::iter::once(purchaser())
    .chain(STAFF.iter().map(row_to_person))
    .collect()
}

fn row_to_person(row: &SeedRow) -> Person {
  let (id, name, title, email, department, location, manager, tenure) = *row;
  Person {
    job_title: Some(title.to_owned()),
    email: Some(email.to_owned()),
    department: Some(department.to_owned()),
    work_location: Some(location.to_owned()),
    manager: Some(manager.to_owned()),
    tenure: Some(tenure.to_owned()),
    employee_type: Some(EmployeeType::Employee),
    ..Person::new(id, name)
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashSet;

  use super::*;

  #[test]
  fn roster_has_single_purchaser_first() {
    let people = default_people();
    assert_eq!(people.len(), 31);
    assert_eq!(people[0].id, PURCHASER_ID);
    assert_eq!(people.iter().filter(|p| p.is_purchaser).count(), 1);
    assert!(people.iter().all(|p| !p.is_custom));
  }

  #[test]
  fn roster_ids_are_unique() {
    let people = default_people();
    let ids: HashSet<_> = people.iter().map(|p| p.id.clone()).collect();
    assert_eq!(ids.len(), people.len());
  }
}
