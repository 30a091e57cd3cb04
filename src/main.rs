use urlfetch::error::AppResult;

fn main() -> AppResult<()> {
    urlfetch::entry::run()
}
