use maud::Render;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: i32,
    pub current_college: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct StudentForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: i32,
    pub current_college: String,
}

impl Student {
    pub fn to_form(&self) -> StudentForm {
        StudentForm {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            age: self.age,
            current_college: self.current_college.clone(),
        }
    }

    #[cfg(test)]
    pub fn with_id(id: impl Into<String>, form: StudentForm) -> Self {
        let StudentForm {
            first_name,
            last_name,
            email,
            age,
            current_college,
        } = form;

        Self {
            id: id.into(),
            first_name,
            last_name,
            email,
            age,
            current_college,
        }
    }
}

impl Render for Student {
    fn render_to(&self, buffer: &mut String) {
        self.first_name.render_to(buffer);
        buffer.push(' ');
        self.last_name.render_to(buffer);
    }
}
