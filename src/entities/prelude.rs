pub use super::emp::Entity as Emps;
pub use super::emp_num_counter::Entity as EmpNumCounters;
pub use super::skill::Entity as Skills;
