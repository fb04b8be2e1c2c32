#![allow(dead_code)]

pub const HEADER: &str = "id\ttitle\ttagnames\tauthor_id\tbody\tnode_type\tparent_id\tabs_parent_id\tadded_at\tscore\tstate_string\tlast_edited_id\tlast_activity_by_id\tlast_activity_at\tactive_revision_id\textra\textra_ref_id\textra_count\tmarked";

/// One post as it appears in the dump, body newlines left raw.
pub fn post(id: &str, tags: &str, author: &str, body: &str, node_type: &str, parent: &str, added_at: &str) -> String {
    let mut fields = vec![String::new(); 19];
    fields[0] = id.into();
    fields[1] = format!("title {id}");
    fields[2] = tags.into();
    fields[3] = author.into();
    fields[4] = body.into();
    fields[5] = node_type.into();
    fields[6] = parent.into();
    fields[8] = added_at.into();
    fields[9] = "0".into();
    fields.join("\t")
}

/// Small forum dump: two threads, one multi-line question body.
pub fn dump() -> String {
    let posts = [
        post("10", "rust io", "1", "How do I\nread \"stdin\"\nfast?", "question", "", "2012-02-25 08:09:06.787181+00"),
        post("11", "", "2", "Use BufRead", "answer", "10", "2012-02-25 09:10:00.000000+00"),
        post("12", "", "1", "thanks!", "answer", "10", "2012-02-25 08:30:00.000000+00"),
        post("20", "rust  cli rust", "3", "clap?", "question", "", "2012-02-26 21:00:00.000000+00"),
        post("21", "", "1", "x", "comment", "11", "2012-02-26 08:00:00.000000+00"),
    ];
    let mut out = String::from(HEADER);
    out.push('\n');
    for p in posts {
        out.push_str(&p);
        out.push('\n');
    }
    out
}
