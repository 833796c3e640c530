use chrono::{DateTime, Utc};

use crate::model::{Doctor, Patient};

/// 仪表盘视图模型：渲染与路由解耦，方便单测
/// Typed view model for the dashboard page
pub struct DashboardView {
    pub doctor_name: String,
    pub doctor_email: String,
    pub registered_at: String,
    pub picture: String,
    pub patients: Vec<PatientRow>,
}

/// 病人表格的一行
pub struct PatientRow {
    pub serial: usize,
    pub name: String,
    pub age: u32,
    pub disease: String,
    pub registered_at: String,
}

impl DashboardView {
    pub fn new(doctor: &Doctor, patients: &[Patient]) -> Self {
        Self {
            doctor_name: doctor.name.clone(),
            doctor_email: doctor.email.clone(),
            registered_at: format_timestamp(doctor.created_at),
            picture: doctor
                .profile_picture
                .clone()
                .unwrap_or_else(|| "/default-profile.png".to_owned()),
            patients: patient_rows(patients),
        }
    }
}

/// 按登记顺序编号，序号从 1 开始
pub fn patient_rows(patients: &[Patient]) -> Vec<PatientRow> {
    patients
        .iter()
        .enumerate()
        .map(|(i, p)| PatientRow {
            serial: i + 1,
            name: p.name.clone(),
            age: p.age,
            disease: p.disease.clone(),
            registered_at: format_timestamp(p.created_at),
        })
        .collect()
}

/// 本地化风格的时间戳文案
pub fn format_timestamp(t: DateTime<Utc>) -> String {
    t.format("%d/%m/%Y, %H:%M:%S").to_string()
}

/// HTML 转义，所有用户提交的文本进入页面前都要过一遍
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <title>{title}</title>
  <script src="https://cdn.tailwindcss.com"></script>
</head>
<body class="bg-gray-100">
  <nav class="bg-blue-600 text-white p-4 flex justify-between">
    <div class="text-xl font-bold">DOCTOR CAMP</div>
    <div>
      <a href="/" class="mx-2">Home</a>
      <a href="/contact" class="mx-2">Contact Us</a>
    </div>
  </nav>
{body}
  <footer class="text-center text-sm py-4 mt-8 bg-blue-600 text-white">
    &copy; 2025 Banashyamnagar Church Doctor Camp System.
  </footer>
</body>
</html>
"#
    )
}

/// 首页
pub fn index_page() -> String {
    layout(
        "Doctor Camp",
        r#"  <div class="max-w-xl mx-auto bg-white p-8 mt-8 shadow rounded text-center">
    <h1 class="text-3xl font-bold mb-4">Doctor Camp System</h1>
    <p class="mb-6">Register patients, keep your own list, export it any time.</p>
    <a href="/register" class="bg-blue-600 text-white px-4 py-2 rounded">Register</a>
    <a href="/login" class="bg-green-600 text-white px-4 py-2 rounded ml-2">Login</a>
  </div>"#,
    )
}

/// 注册表单页
pub fn register_page() -> String {
    layout(
        "Register",
        r#"  <div class="max-w-md mx-auto bg-white p-8 mt-8 shadow rounded">
    <h2 class="text-2xl font-bold mb-4">Doctor Registration</h2>
    <form action="/register" method="POST" class="space-y-3">
      <input type="text" name="name" placeholder="Name" class="w-full border p-2 rounded">
      <input type="email" name="email" placeholder="Email" class="w-full border p-2 rounded">
      <input type="password" name="password" placeholder="Password" class="w-full border p-2 rounded">
      <button type="submit" class="bg-blue-600 text-white px-4 py-2 rounded w-full">Register</button>
    </form>
    <p class="mt-3 text-sm">Already registered? <a href="/login" class="text-blue-600">Login</a></p>
  </div>"#,
    )
}

/// 登录表单页
pub fn login_page() -> String {
    layout(
        "Login",
        r#"  <div class="max-w-md mx-auto bg-white p-8 mt-8 shadow rounded">
    <h2 class="text-2xl font-bold mb-4">Doctor Login</h2>
    <form action="/login" method="POST" class="space-y-3">
      <input type="email" name="email" placeholder="Email" class="w-full border p-2 rounded">
      <input type="password" name="password" placeholder="Password" class="w-full border p-2 rounded">
      <button type="submit" class="bg-blue-600 text-white px-4 py-2 rounded w-full">Login</button>
    </form>
    <p class="mt-3 text-sm">New here? <a href="/register" class="text-blue-600">Register</a></p>
  </div>"#,
    )
}

/// 新增病人表单页
pub fn add_patient_page() -> String {
    layout(
        "Add Patient",
        r#"  <div class="max-w-md mx-auto bg-white p-8 mt-8 shadow rounded">
    <h2 class="text-2xl font-bold mb-4">Add Patient</h2>
    <form action="/add-patient" method="POST" class="space-y-3">
      <input type="text" name="name" placeholder="Patient name" class="w-full border p-2 rounded">
      <input type="number" name="age" placeholder="Age" class="w-full border p-2 rounded">
      <input type="text" name="disease" placeholder="Disease" class="w-full border p-2 rounded">
      <button type="submit" class="bg-blue-600 text-white px-4 py-2 rounded w-full">Save</button>
    </form>
    <p class="mt-3 text-sm"><a href="/dashboard" class="text-blue-600">Back to dashboard</a></p>
  </div>"#,
    )
}

/// 联系表单页
pub fn contact_page() -> String {
    layout(
        "Contact Us",
        r#"  <div class="max-w-md mx-auto bg-white p-8 mt-8 shadow rounded">
    <h2 class="text-2xl font-bold mb-4">Contact Us</h2>
    <form action="/contact" method="POST" class="space-y-3">
      <input type="text" name="name" placeholder="Your name" class="w-full border p-2 rounded">
      <input type="email" name="email" placeholder="Email" class="w-full border p-2 rounded">
      <textarea name="message" placeholder="Message" class="w-full border p-2 rounded"></textarea>
      <button type="submit" class="bg-blue-600 text-white px-4 py-2 rounded w-full">Send</button>
    </form>
  </div>"#,
    )
}

/// 仪表盘：医生信息卡、上传表单、操作按钮和病人表格
pub fn dashboard_page(view: &DashboardView) -> String {
    let rows: String = view
        .patients
        .iter()
        .map(|p| {
            format!(
                r#"    <tr class="text-center">
      <td class="py-1 px-2 border">{}</td>
      <td class="py-1 px-2 border">{}</td>
      <td class="py-1 px-2 border">{}</td>
      <td class="py-1 px-2 border">{}</td>
      <td class="py-1 px-2 border">{}</td>
    </tr>
"#,
                p.serial,
                escape(&p.name),
                p.age,
                escape(&p.disease),
                escape(&p.registered_at),
            )
        })
        .collect();

    let body = format!(
        r#"  <div class="bg-white p-6 shadow rounded mb-4 flex justify-between">
    <div>
      <h2 class="text-2xl font-bold">Welcome, Dr. {name}</h2>
      <p>Email: {email}</p>
      <p>Registered on: {registered}</p>
      <form action="/upload-profile" method="POST" enctype="multipart/form-data" class="mt-4">
        <input type="file" name="profilePicture" accept="image/*">
        <button type="submit" class="bg-blue-500 text-white px-3 py-1 rounded">Upload</button>
      </form>
    </div>
    <div>
      <img src="{picture}" class="w-32 h-32 rounded-full object-cover border">
    </div>
  </div>

  <div class="mb-4">
    <a href="/addpatient" class="bg-blue-600 text-white px-4 py-2 rounded">Add Patient</a>
    <a href="/export" class="bg-green-600 text-white px-4 py-2 rounded ml-2">Download Excel</a>
    <a href="/download-pdf" class="bg-red-600 text-white px-4 py-2 rounded ml-2">Download PDF</a>
  </div>

  <table class="min-w-full bg-white border rounded">
    <thead>
      <tr>
        <th class="py-2 px-4 border">Sl. No.</th>
        <th class="py-2 px-4 border">Name</th>
        <th class="py-2 px-4 border">Age</th>
        <th class="py-2 px-4 border">Disease</th>
        <th class="py-2 px-4 border">Registered At</th>
      </tr>
    </thead>
    <tbody>
{rows}    </tbody>
  </table>"#,
        name = escape(&view.doctor_name),
        email = escape(&view.doctor_email),
        registered = escape(&view.registered_at),
        picture = escape(&view.picture),
        rows = rows,
    );
    layout("Dashboard", &body)
}

/// 单句提示页，附一条导航链接；校验失败与操作确认都走这里
pub fn message_page(text: &str, href: &str, label: &str) -> String {
    layout(
        "Doctor Camp",
        &format!(
            r#"  <div class="max-w-md mx-auto bg-white p-8 mt-8 shadow rounded text-center">
    <p class="mb-4">{}</p>
    <a href="{}" class="text-blue-600">{}</a>
  </div>"#,
            escape(text),
            href,
            escape(label),
        ),
    )
}
