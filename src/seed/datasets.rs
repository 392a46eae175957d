// Fixed seed data. Edit these tables to change what the seeders write.
//
// The two variants disagree on role ids for the same accounts
// (user/staff are 0/1 here and 1/2 in LITE). Both are kept as-is.

use super::{Department, ReportCategory, Role, SeedDataset, SeedUser};

/// Roles, departments, categories and users (`seed-users`)
pub const REFERENCE: SeedDataset = SeedDataset {
    name: "reference",
    roles: &[
        Role { id: 0, name: "user" },
        Role { id: 1, name: "staff" },
    ],
    departments: &[Department {
        id: 1,
        name: "Field Operations",
    }],
    categories: &[ReportCategory {
        id: 1,
        name: "Infrastructure",
        department_id: 1,
    }],
    users: &[
        SeedUser {
            id: 1,
            email: "normal.user@example.com",
            password: "Password123!",
            name: "Normal User",
            is_active: true,
            created_at: Some("2025-01-01T00:00:00Z"),
            role_id: 0,
            department_id: None,
        },
        SeedUser {
            id: 2,
            email: "staff.user@example.com",
            password: "StaffPass123!",
            name: "Staff User",
            is_active: true,
            created_at: Some("2025-01-01T00:00:00Z"),
            role_id: 1,
            department_id: Some(1),
        },
    ],
};

/// Users only, for databases whose reference tables are already populated
/// (`seed-users-lite`)
pub const LITE: SeedDataset = SeedDataset {
    name: "lite",
    roles: &[],
    departments: &[],
    categories: &[],
    users: &[
        SeedUser {
            id: 1,
            email: "normal.user@example.com",
            password: "Password123!",
            name: "Normal User",
            is_active: true,
            created_at: Some("2025-01-01T00:00:00Z"),
            role_id: 1,
            department_id: None,
        },
        SeedUser {
            id: 2,
            email: "staff.user@example.com",
            password: "StaffPass123!",
            name: "Staff User",
            is_active: true,
            created_at: None,
            role_id: 2,
            department_id: Some(1),
        },
    ],
};
